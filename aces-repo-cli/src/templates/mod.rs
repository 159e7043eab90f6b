//! Static template catalog
//!
//! A fixed mapping from archetype to template entries. Pure data: contents
//! are embedded constants, nothing here touches the filesystem. Unknown
//! archetypes cannot reach this module — [`crate::spec::RepoType`] is a
//! closed enum and parsing rejects anything else before any side effect.

pub mod files;
pub mod governance;
pub mod python;
pub mod rust;

use crate::spec::RepoType;

/// One template in the catalog
#[derive(Debug)]
pub struct TemplateEntry {
    /// Identifier used in error reports
    pub source_id: &'static str,
    /// Raw template content
    pub content: &'static [u8],
    /// Destination path relative to the target root; may itself contain
    /// placeholder tokens (the Python package directory does)
    pub dest: &'static str,
}

const fn entry(source_id: &'static str, content: &'static str, dest: &'static str) -> TemplateEntry {
    TemplateEntry {
        source_id,
        content: content.as_bytes(),
        dest,
    }
}

/// Templates every archetype receives
const SHARED: &[TemplateEntry] = &[
    entry("LICENSE", files::LICENSE, "LICENSE"),
    entry("CHANGELOG.md", files::CHANGELOG_MD, "CHANGELOG.md"),
    entry("CLAUDE.md", files::CLAUDE_MD, "CLAUDE.md"),
    entry("SECURITY.md", files::SECURITY_MD, "SECURITY.md"),
    entry("README.md", files::README_MD, "README.md"),
    entry("markdownlint.yaml", files::MARKDOWNLINT_YAML, ".markdownlint.yaml"),
    entry(
        "pre-commit-config.yaml",
        files::PRE_COMMIT_CONFIG,
        ".pre-commit-config.yaml",
    ),
    entry(
        "pull_request_template.md",
        files::PULL_REQUEST_TEMPLATE,
        ".github/pull_request_template.md",
    ),
    entry(
        "ISSUE_TEMPLATE/config.yml",
        files::ISSUE_CONFIG_YML,
        ".github/ISSUE_TEMPLATE/config.yml",
    ),
    entry(
        "ISSUE_TEMPLATE/feature-request.md",
        files::FEATURE_REQUEST_MD,
        ".github/ISSUE_TEMPLATE/feature-request.md",
    ),
];

const RUST: &[TemplateEntry] = &[
    entry("Cargo.toml", rust::CARGO_TOML, "Cargo.toml"),
    entry("cargo-deny.toml", rust::CARGO_DENY_TOML, "cargo-deny.toml"),
    entry(
        "rust-toolchain.toml",
        rust::RUST_TOOLCHAIN_TOML,
        "rust-toolchain.toml",
    ),
    entry("gitignore-rust", rust::GITIGNORE, ".gitignore"),
    entry("mcp.json", files::MCP_JSON, ".mcp.json"),
    entry("lib.rs", rust::LIB_RS, "src/lib.rs"),
    entry(
        "ISSUE_TEMPLATE/bug-report.md",
        files::BUG_REPORT_MD,
        ".github/ISSUE_TEMPLATE/bug-report.md",
    ),
    entry("ci-rust.yaml", rust::CI_YAML, ".github/workflows/ci.yaml"),
];

const PYTHON: &[TemplateEntry] = &[
    entry("pyproject.toml", python::PYPROJECT_TOML, "pyproject.toml"),
    entry("gitignore-python", python::GITIGNORE, ".gitignore"),
    entry("mcp.json", files::MCP_JSON, ".mcp.json"),
    entry("init.py", python::INIT_PY, "src/aces_REPO_NAME/__init__.py"),
    entry(
        "ISSUE_TEMPLATE/bug-report.md",
        files::BUG_REPORT_MD,
        ".github/ISSUE_TEMPLATE/bug-report.md",
    ),
    entry("ci-python.yaml", python::CI_YAML, ".github/workflows/ci.yaml"),
];

const GOVERNANCE: &[TemplateEntry] = &[
    entry(
        "ISSUE_TEMPLATE/adr-proposal.md",
        governance::ADR_PROPOSAL_MD,
        ".github/ISSUE_TEMPLATE/adr-proposal.md",
    ),
    entry(
        "ISSUE_TEMPLATE/rfc-proposal.md",
        governance::RFC_PROPOSAL_MD,
        ".github/ISSUE_TEMPLATE/rfc-proposal.md",
    ),
    entry("adrs/TEMPLATE.md", governance::ADR_TEMPLATE_MD, "adrs/TEMPLATE.md"),
    entry(
        "ci-governance.yaml",
        governance::CI_YAML,
        ".github/workflows/ci.yaml",
    ),
];

/// The archetype's templates plus every shared entry
#[must_use]
pub fn catalog_for(repo_type: RepoType) -> Vec<&'static TemplateEntry> {
    let specific: &[TemplateEntry] = match repo_type {
        RepoType::Rust => RUST,
        RepoType::Python => PYTHON,
        RepoType::Governance => GOVERNANCE,
    };
    SHARED.iter().chain(specific.iter()).collect()
}
