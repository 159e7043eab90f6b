//! Integration tests for repo scaffolding

use std::fs;
use std::path::Path;

use aces_repo_cli_lib::bindings::PlaceholderBindings;
use aces_repo_cli_lib::spec::{RepoSpec, RepoType};
use aces_repo_cli_lib::{AcesRepoError, Materializer};
use tempfile::TempDir;

fn scaffold(name: &str, repo_type: RepoType, description: &str) -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let spec = RepoSpec::new(name, repo_type, Some(description.to_string())).unwrap();
    let bindings = PlaceholderBindings::for_spec(&spec).unwrap();
    let target = tmp.path().join(name);
    Materializer::new(&bindings)
        .materialize(repo_type, &target)
        .unwrap();
    (tmp, target)
}

fn walk_files(dir: &Path, out: &mut Vec<std::path::PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            walk_files(&path, out);
        } else {
            out.push(path);
        }
    }
}

/// End-to-end: a rust repo materializes with every placeholder resolved
#[test]
fn rust_scaffold_resolves_all_placeholders() {
    let (_tmp, root) = scaffold("aces-demo", RepoType::Rust, "Demo");

    let cargo = fs::read_to_string(root.join("Cargo.toml")).unwrap();
    assert!(cargo.contains("name = \"aces-demo\""));
    assert!(cargo.contains("name = \"aces_demo\""));
    assert!(cargo.contains("description = \"Demo\""));

    let mut files = Vec::new();
    walk_files(&root, &mut files);
    assert!(files.len() >= 15, "expected a full tree, got {files:?}");
    for file in files {
        let content = fs::read_to_string(&file).unwrap();
        assert!(
            !content.contains("REPO_NAME") && !content.contains("REPO_DESCRIPTION"),
            "unresolved placeholder in {}",
            file.display()
        );
    }
}

/// The shared governance files land for every archetype
#[test]
fn shared_files_exist_for_every_archetype() {
    for (name, repo_type) in [
        ("aces-rustdemo", RepoType::Rust),
        ("aces-pydemo", RepoType::Python),
        ("aces-govdemo", RepoType::Governance),
    ] {
        let (_tmp, root) = scaffold(name, repo_type, "x");
        for file in [
            "LICENSE",
            "CHANGELOG.md",
            "CLAUDE.md",
            "SECURITY.md",
            "README.md",
            ".markdownlint.yaml",
            ".pre-commit-config.yaml",
            ".github/pull_request_template.md",
            ".github/ISSUE_TEMPLATE/config.yml",
            ".github/workflows/ci.yaml",
        ] {
            assert!(root.join(file).exists(), "{name} missing {file}");
        }
    }
}

/// The Python package directory is renamed through the bindings
#[test]
fn python_package_dir_uses_underscored_name() {
    let (_tmp, root) = scaffold("aces-agent-sdk", RepoType::Python, "SDK");
    assert!(root.join("src/aces_agent_sdk/__init__.py").exists());
    assert!(!root.join("src/aces_REPO_NAME").exists());
}

/// A pre-existing target directory fails fast with zero writes
#[test]
fn existing_target_is_rejected_before_any_write() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("aces-demo");
    fs::create_dir(&target).unwrap();

    let spec = RepoSpec::new("aces-demo", RepoType::Rust, None).unwrap();
    let bindings = PlaceholderBindings::for_spec(&spec).unwrap();
    let err = Materializer::new(&bindings)
        .materialize(RepoType::Rust, &target)
        .unwrap_err();

    assert!(matches!(err, AcesRepoError::AlreadyExists(_)));
    assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
}

/// An unknown archetype string is rejected before anything touches disk
#[test]
fn invalid_archetype_creates_nothing() {
    let err = "invalid-type".parse::<RepoType>().unwrap_err();
    assert!(matches!(err, AcesRepoError::Configuration(_)));
    assert!(!Path::new("invalid-type").exists());
}

/// Scaffolded tree plus git init yields a repository with one commit's
/// worth of content staged and committed
#[test]
fn git_init_creates_a_repository() {
    if !aces_repo_cli_lib::git::git_available() {
        return;
    }
    // Commit identity for environments without a global git config.
    std::env::set_var("GIT_AUTHOR_NAME", "test");
    std::env::set_var("GIT_AUTHOR_EMAIL", "test@example.com");
    std::env::set_var("GIT_COMMITTER_NAME", "test");
    std::env::set_var("GIT_COMMITTER_EMAIL", "test@example.com");

    let (_tmp, root) = scaffold("aces-gitdemo", RepoType::Rust, "Git demo");
    aces_repo_cli_lib::git::init_local(&root).unwrap();
    assert!(root.join(".git").exists());
}
