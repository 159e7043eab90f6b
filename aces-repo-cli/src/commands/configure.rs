//! Remote configuration command
//!
//! Re-applies the archetype's desired GitHub state to an existing repo.
//! Idempotent: every step either replaces absolute values or tolerates
//! "already exists", so running it repeatedly converges to the same state.

use aces_repo_cli_lib::github::{ConfigReport, GithubHost, RemoteConfigurator, GITHUB_ORG};
use aces_repo_cli_lib::spec::{RepoSpec, RepoType};
use anyhow::{Context, Result};
use console::style;

/// Converge an existing repo's GitHub configuration
pub struct ConfigureCommand {
    spec: RepoSpec,
}

impl ConfigureCommand {
    /// Validate the name and build the command.
    ///
    /// # Errors
    ///
    /// Fails on an invalid repo name before any API call is made.
    pub fn new(name: String, repo_type: RepoType) -> Result<Self> {
        let spec = RepoSpec::new(name, repo_type, None)?;
        Ok(Self { spec })
    }

    /// Apply the desired state.
    ///
    /// # Errors
    ///
    /// Fatal configuration failures (settings, topics, branch protection)
    /// and authentication problems.
    pub fn execute(&self) -> Result<ConfigReport> {
        let repo = format!("{GITHUB_ORG}/{}", self.spec.name);
        println!(
            "{} {}",
            style("Configuring").green().bold(),
            style(&repo).cyan().bold()
        );

        let host = GithubHost::from_env().context("authenticating to GitHub")?;
        let report = RemoteConfigurator::new(&host)
            .configure(&repo, self.spec.repo_type)
            .context("configuring GitHub repository")?;

        println!("{}", style("✓ Configuration applied").green().bold());
        Ok(report)
    }
}
