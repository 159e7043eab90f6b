//! Local git initialization
//!
//! Git is an opaque external collaborator; its diagnostics are surfaced
//! verbatim and nothing is retried.

use std::path::Path;
use std::process::Command;

use crate::error::AcesRepoError;

/// Default primary branch for new repos
pub const DEFAULT_BRANCH: &str = "main";

/// Commit message for the initial commit
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from ACES governance templates";

/// Initialize a git repo at `target` with one commit containing every
/// materialized file.
///
/// # Errors
///
/// Returns [`AcesRepoError::Vcs`] with git's stderr when any invocation
/// fails (git missing, commit identity not configured, ...).
pub fn init_local(target: &Path) -> Result<(), AcesRepoError> {
    run_git(target, &["init", "-b", DEFAULT_BRANCH])?;
    run_git(target, &["add", "-A"])?;
    run_git(target, &["commit", "-m", INITIAL_COMMIT_MESSAGE])?;
    Ok(())
}

/// True when a usable git binary is on the PATH
#[must_use]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

fn run_git(dir: &Path, args: &[&str]) -> Result<(), AcesRepoError> {
    let command = args.join(" ");
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|err| AcesRepoError::Vcs {
            command: command.clone(),
            detail: err.to_string(),
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(AcesRepoError::Vcs {
            command,
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
