//! Shared template contents
//!
//! Files every ACES repo carries regardless of archetype, plus the
//! `.mcp.json` / bug-report pair shared by the rust and python archetypes.
//! Placeholder tokens (`REPO_NAME`, `aces-REPO_NAME`, `aces_REPO_NAME`,
//! `REPO_DESCRIPTION`, `YYYY`) are literal markers resolved at
//! materialization time.

/// LICENSE notice for all repos
pub const LICENSE: &str = r#"Copyright YYYY ACES Contributors

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
"#;

/// CHANGELOG.md skeleton (Keep a Changelog format)
pub const CHANGELOG_MD: &str = r"# Changelog

All notable changes to this project will be documented in this file.

The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.1.0/),
and this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html).

## [Unreleased]
";

/// CLAUDE.md agent instructions
pub const CLAUDE_MD: &str = r"# REPO_NAME

REPO_DESCRIPTION

## Working in this repo

- All ACES repos live as siblings under a shared parent directory; the
  governance repo (`aces`) holds STANDARDS.md, ARCHITECTURE.md, and ADRs.
- Never hand-edit dependency versions; use the package manager
  (`cargo add` / `uv add`).
- Write tests before code. Test behavior, not implementation.
- Propose cross-repo decisions as ADRs in the governance repo first.
";

/// SECURITY.md policy
pub const SECURITY_MD: &str = r"# Security Policy

## Reporting a Vulnerability

Report vulnerabilities privately through GitHub Security Advisories on this
repository (Security tab, then Report a vulnerability). Do not open public
issues for security problems.

You can expect an initial response within seven days.
";

/// README.md skeleton
pub const README_MD: &str = r"# REPO_NAME

REPO_DESCRIPTION

Part of the [ACES framework](https://github.com/aces-framework/aces).
Project-wide standards, architecture, and ADRs live in the governance repo.

## License

Apache-2.0
";

/// .markdownlint.yaml shared lint configuration
pub const MARKDOWNLINT_YAML: &str = r"default: true
MD013:
  line_length: 100
  code_blocks: false
  tables: false
MD033: false
";

/// .pre-commit-config.yaml shared hooks
pub const PRE_COMMIT_CONFIG: &str = r"repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v5.0.0
    hooks:
      - id: end-of-file-fixer
      - id: trailing-whitespace
      - id: check-merge-conflict
  - repo: https://github.com/igorshubovych/markdownlint-cli
    rev: v0.43.0
    hooks:
      - id: markdownlint
";

/// .github/pull_request_template.md
pub const PULL_REQUEST_TEMPLATE: &str = r"## Description

<!-- What does this change do, and why? -->

## Checklist

- [ ] Tests added or updated
- [ ] CHANGELOG.md updated under [Unreleased]
- [ ] Relevant ADRs referenced or proposed
";

/// .github/ISSUE_TEMPLATE/config.yml
pub const ISSUE_CONFIG_YML: &str = r"blank_issues_enabled: false
contact_links:
  - name: ACES governance discussions
    url: https://github.com/aces-framework/aces/discussions
    about: Cross-repo questions and design discussions belong here.
";

/// .github/ISSUE_TEMPLATE/feature-request.md
pub const FEATURE_REQUEST_MD: &str = r"---
name: Feature Request
about: Suggest an improvement to REPO_NAME
labels: enhancement
---

## Problem

## Proposed solution

## Alternatives considered
";

/// .github/ISSUE_TEMPLATE/bug-report.md (rust and python archetypes)
pub const BUG_REPORT_MD: &str = r"---
name: Bug Report
about: Report a defect in REPO_NAME
labels: bug
---

## Expected behavior

## Actual behavior

## Steps to reproduce

## Environment
";

/// .mcp.json wiring the governance MCP server (rust and python archetypes)
pub const MCP_JSON: &str = r#"{
  "mcpServers": {
    "aces-governance": {
      "command": "uv",
      "args": [
        "run",
        "--directory",
        "../aces/tools/governance-mcp",
        "aces-governance-mcp"
      ]
    }
  }
}
"#;
