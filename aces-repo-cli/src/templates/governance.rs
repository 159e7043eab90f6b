//! Governance-archetype template contents

/// .github/ISSUE_TEMPLATE/adr-proposal.md
pub const ADR_PROPOSAL_MD: &str = r"---
name: ADR Proposal
about: Propose an architecture decision record
labels: adr, governance
---

## Title

## Context

<!-- What forces are at play? What problem does this decide? -->

## Proposed decision

## Consequences

## Repos affected
";

/// .github/ISSUE_TEMPLATE/rfc-proposal.md
pub const RFC_PROPOSAL_MD: &str = r"---
name: RFC Proposal
about: Request comments on a cross-repo design
labels: governance
---

## Summary

## Motivation

## Detailed design

## Open questions
";

/// adrs/TEMPLATE.md skeleton for new decision records
pub const ADR_TEMPLATE_MD: &str = r"# ADR-XXXX: Title

## Status

Proposed

## Context

## Decision

## Consequences
";

/// .github/workflows/ci.yaml with the `lint` job
pub const CI_YAML: &str = r"name: CI

on:
  push:
    branches: [main]
  pull_request:

jobs:
  lint:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: actions/setup-python@v5
        with:
          python-version: '3.12'
      - run: pip install pre-commit
      - run: pre-commit run --all-files
";
