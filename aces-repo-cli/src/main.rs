//! aces-repo CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use std::process::ExitCode;

use aces_repo_cli_lib::github::ConfigReport;
use aces_repo_cli_lib::spec::RepoType;
use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{ConfigureCommand, NewCommand};
use console::style;

#[derive(Parser)]
#[command(name = "aces-repo")]
#[command(version)]
#[command(about = "Scaffold and configure ACES framework repositories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new repo from the governance templates
    New {
        /// Repository name (must carry the `aces-` prefix)
        name: String,
        /// Repo archetype
        #[arg(long = "type", value_enum)]
        repo_type: RepoType,
        /// Short description used in templates and on GitHub
        #[arg(long)]
        description: Option<String>,
        /// Also create and configure the GitHub repository
        #[arg(long)]
        github: bool,
        /// Create the GitHub repository as private
        #[arg(long, requires = "github")]
        private: bool,
    },
    /// Converge an existing repo's GitHub configuration to the desired
    /// state for its archetype
    Configure {
        /// Repository name (must carry the `aces-` prefix)
        name: String,
        /// Repo archetype
        #[arg(long = "type", value_enum)]
        repo_type: RepoType,
    },
}

fn run() -> Result<ConfigReport> {
    let cli = Cli::parse();
    match cli.command {
        Commands::New {
            name,
            repo_type,
            description,
            github,
            private,
        } => NewCommand::new(name, repo_type, description, github, private)?.execute(),
        Commands::Configure { name, repo_type } => {
            ConfigureCommand::new(name, repo_type)?.execute()
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(report) if report.is_clean() => ExitCode::SUCCESS,
        Ok(report) => {
            for warning in &report.warnings {
                eprintln!("{} {warning}", style("warning:").yellow().bold());
            }
            eprintln!(
                "{}",
                style("Completed with warnings; non-fatal steps were skipped.").yellow()
            );
            // Distinct exit code for "succeeded with warnings".
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
