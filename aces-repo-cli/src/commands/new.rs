//! Repo creation command
//!
//! Sequences the pipeline: materialize templates, initialize git, then
//! (when requested) create and configure the GitHub repository. A fatal
//! failure halts the pipeline; completed stages are never rolled back, so
//! a half-created directory can be inspected and removed by hand.

use std::path::PathBuf;

use aces_repo_cli_lib::bindings::PlaceholderBindings;
use aces_repo_cli_lib::git;
use aces_repo_cli_lib::github::{
    ConfigReport, GithubHost, RemoteConfigurator, RepoHost, GITHUB_ORG,
};
use aces_repo_cli_lib::scaffold::Materializer;
use aces_repo_cli_lib::spec::{RepoSpec, RepoType};
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Create a new ACES repo from the governance templates
pub struct NewCommand {
    spec: RepoSpec,
    target: PathBuf,
    github: bool,
    private: bool,
}

impl NewCommand {
    /// Validate inputs and build the command.
    ///
    /// # Errors
    ///
    /// Fails on an invalid repo name; nothing has been mutated at that
    /// point.
    pub fn new(
        name: String,
        repo_type: RepoType,
        description: Option<String>,
        github: bool,
        private: bool,
    ) -> Result<Self> {
        let spec = RepoSpec::new(name, repo_type, description)?;
        let target = PathBuf::from(&spec.name);
        Ok(Self {
            spec,
            target,
            github,
            private,
        })
    }

    /// Run the pipeline.
    ///
    /// # Errors
    ///
    /// Any fatal stage failure, annotated with the stage that failed.
    pub fn execute(&self) -> Result<ConfigReport> {
        println!(
            "{} {} {}",
            style("Creating").green().bold(),
            style("ACES repo:").bold(),
            style(&self.spec.name).cyan().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        spinner.set_message("Materializing templates...");
        let bindings = PlaceholderBindings::for_spec(&self.spec)?;
        Materializer::new(&bindings)
            .materialize(self.spec.repo_type, &self.target)
            .context("materializing templates")?;

        spinner.set_message("Initializing git repository...");
        git::init_local(&self.target).context("initializing local git repo")?;

        let report = if self.github {
            spinner.set_message("Configuring GitHub repository...");
            self.setup_remote()?
        } else {
            ConfigReport::default()
        };

        spinner.finish_and_clear();
        self.print_success();
        Ok(report)
    }

    fn setup_remote(&self) -> Result<ConfigReport> {
        let host = GithubHost::from_env().context("authenticating to GitHub")?;

        match host.create_repo(
            GITHUB_ORG,
            &self.spec.name,
            self.private,
            self.spec.description_text(),
        ) {
            Ok(()) => {}
            // Re-running against an existing repo is fine; configuration
            // below converges it either way.
            Err(err) if err.is_already_satisfied() => {}
            Err(err) => return Err(err).context("creating GitHub repository"),
        }

        let repo = format!("{GITHUB_ORG}/{}", self.spec.name);
        let report = RemoteConfigurator::new(&host)
            .configure(&repo, self.spec.repo_type)
            .context("configuring GitHub repository")?;
        Ok(report)
    }

    fn print_success(&self) {
        println!("{}", style("✓ Repo created").green().bold());
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!(
            "  {} {}",
            style("$").dim(),
            style(format!("cd {}", self.spec.name)).cyan()
        );
        if self.github {
            println!(
                "  {} {}",
                style("$").dim(),
                style(format!(
                    "git remote add origin git@github.com:{GITHUB_ORG}/{}.git",
                    self.spec.name
                ))
                .cyan()
            );
            println!(
                "  {} {}",
                style("$").dim(),
                style("git push -u origin main").cyan()
            );
        }
        println!();
    }
}
