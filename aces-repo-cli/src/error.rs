//! Error types for scaffolding and remote configuration
//!
//! Pre-flight errors (`Configuration`, `AlreadyExists`) are raised before
//! anything is written. Mid-pipeline errors halt the run without rolling
//! back completed stages; whatever is already on disk stays there for
//! inspection. Non-fatal remote failures are not errors at all — they are
//! collected as [`crate::github::Warning`]s by the configurator.

use std::path::PathBuf;

use thiserror::Error;

use crate::github::HostError;

/// Errors raised while creating or configuring an ACES repo
#[derive(Debug, Error)]
pub enum AcesRepoError {
    /// Invalid repo name, archetype, or placeholder set; nothing was mutated
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The target directory already exists; nothing was written
    #[error("target directory already exists: {0}")]
    AlreadyExists(PathBuf),

    /// I/O failure while writing a template to disk
    #[error("failed to materialize template '{template}': {source}")]
    Materialize {
        /// Identifier of the template that failed
        template: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Local git invocation failed
    #[error("git {command} failed: {detail}")]
    Vcs {
        /// The git subcommand that failed
        command: String,
        /// Diagnostic output from git, verbatim
        detail: String,
    },

    /// A fatal remote-configuration step failed
    #[error("remote configuration failed during {step}: {source}")]
    RemoteConfig {
        /// Which configuration step failed
        step: &'static str,
        /// Failure reported by the hosting platform
        #[source]
        source: HostError,
    },
}
