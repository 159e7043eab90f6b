//! Rust-archetype template contents

/// Cargo.toml for a new crate
pub const CARGO_TOML: &str = r#"[package]
name = "aces-REPO_NAME"
version = "0.1.0"
edition = "2021"
rust-version = "1.85"
license = "Apache-2.0"
description = "REPO_DESCRIPTION"
repository = "https://github.com/aces-framework/REPO_NAME"

[lib]
name = "aces_REPO_NAME"

[dependencies]

[dev-dependencies]
"#;

/// cargo-deny.toml license and advisory policy
pub const CARGO_DENY_TOML: &str = r#"[advisories]
version = 2
yanked = "deny"

[licenses]
version = 2
allow = [
    "Apache-2.0",
    "MIT",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "Unicode-3.0",
]

[bans]
multiple-versions = "warn"
wildcards = "deny"

[sources]
unknown-registry = "deny"
unknown-git = "deny"
"#;

/// rust-toolchain.toml pin
pub const RUST_TOOLCHAIN_TOML: &str = r#"[toolchain]
channel = "1.85"
components = ["rustfmt", "clippy"]
"#;

/// .gitignore for Rust repos
pub const GITIGNORE: &str = r"/target
**/*.rs.bk
";

/// src/lib.rs stub
pub const LIB_RS: &str = r"#![deny(missing_docs)]

//! REPO_DESCRIPTION
";

/// .github/workflows/ci.yaml with the `check` job
pub const CI_YAML: &str = r"name: CI

on:
  push:
    branches: [main]
  pull_request:

jobs:
  check:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: dtolnay/rust-toolchain@stable
        with:
          components: rustfmt, clippy
      - run: cargo fmt --check
      - run: cargo clippy --all-targets -- -D warnings
      - run: cargo test
      - run: cargo doc --no-deps
      - run: cargo install cargo-deny --locked
      - run: cargo deny check
";
