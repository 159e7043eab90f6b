//! Python-archetype template contents

/// pyproject.toml for a new package
pub const PYPROJECT_TOML: &str = r#"[project]
name = "aces_REPO_NAME"
version = "0.1.0"
description = "REPO_DESCRIPTION"
license = "Apache-2.0"
requires-python = ">=3.12"
dependencies = []

[dependency-groups]
dev = [
    "mypy",
    "pytest",
    "ruff",
    "pip-audit",
]

[build-system]
requires = ["hatchling"]
build-backend = "hatchling.build"

[tool.mypy]
strict = true

[tool.ruff]
line-length = 100

[tool.ruff.lint]
select = ["ALL"]
ignore = ["D203", "D213"]
"#;

/// .gitignore for Python repos
pub const GITIGNORE: &str = r"__pycache__/
*.py[cod]
.venv/
dist/
.mypy_cache/
.ruff_cache/
.pytest_cache/
";

/// src/aces_REPO_NAME/__init__.py stub
pub const INIT_PY: &str = r#""""REPO_DESCRIPTION"""
"#;

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
      - uses: astral-sh/setup-uv@v5
      - run: uv sync --all-groups
      - run: uv run ruff check .
      - run: uv run ruff format --check .
      - run: uv run mypy --strict .
      - run: uv run pytest
      - run: uv run pip-audit
";
