//! Idempotent remote configuration
//!
//! Safe to re-run against an already-configured repo: settings, topics, and
//! branch protection are absolute-value replacements; label creation and
//! the vulnerability toggles treat "already exists / already enabled" as
//! success. Fatal steps (settings, topics, protection) halt the run;
//! label and toggle failures are collected as warnings instead.

use std::fmt;

use crate::error::AcesRepoError;
use crate::github::desired::RemoteDesiredState;
use crate::github::{HostError, RepoHost};
use crate::spec::RepoType;

/// A tolerated, reported failure from a non-fatal configuration step
#[derive(Debug)]
pub struct Warning {
    /// The configuration step that failed
    pub step: &'static str,
    /// What went wrong
    pub detail: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.step, self.detail)
    }
}

/// Outcome of a configuration run that did not fail fatally
#[derive(Debug, Default)]
pub struct ConfigReport {
    /// Non-fatal failures, in the order they occurred
    pub warnings: Vec<Warning>,
}

impl ConfigReport {
    /// True when every step succeeded outright
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Applies [`RemoteDesiredState`] to a repo through a [`RepoHost`]
pub struct RemoteConfigurator<'a> {
    host: &'a dyn RepoHost,
}

impl<'a> RemoteConfigurator<'a> {
    /// Wrap a host
    #[must_use]
    pub const fn new(host: &'a dyn RepoHost) -> Self {
        Self { host }
    }

    /// Converge `repo` (full `owner/name`) to the archetype's desired
    /// state.
    ///
    /// # Errors
    ///
    /// [`AcesRepoError::RemoteConfig`] when a fatal step (settings, topics,
    /// branch protection) fails. Non-fatal failures end up in the returned
    /// [`ConfigReport`] instead.
    pub fn configure(
        &self,
        repo: &str,
        repo_type: RepoType,
    ) -> Result<ConfigReport, AcesRepoError> {
        let desired = RemoteDesiredState::for_type(repo_type);
        let mut report = ConfigReport::default();

        self.host
            .update_repo_settings(repo, &desired.settings)
            .map_err(|source| AcesRepoError::RemoteConfig {
                step: "repository settings",
                source,
            })?;

        self.host
            .replace_topics(repo, &desired.topics)
            .map_err(|source| AcesRepoError::RemoteConfig {
                step: "topics",
                source,
            })?;

        for label in &desired.labels {
            match self.host.create_label(repo, label) {
                Ok(()) => {}
                Err(err) if err.is_already_satisfied() => {}
                Err(err) => report.warnings.push(Warning {
                    step: "labels",
                    detail: format!("label '{}': {err}", label.name),
                }),
            }
        }

        self.host
            .put_branch_protection(repo, desired.branch, &desired.protection)
            .map_err(|source| AcesRepoError::RemoteConfig {
                step: "branch protection",
                source,
            })?;

        let toggles: [(&'static str, Result<(), HostError>); 2] = [
            (
                "vulnerability alerts",
                self.host.enable_vulnerability_alerts(repo),
            ),
            (
                "private vulnerability reporting",
                self.host.enable_private_vulnerability_reporting(repo),
            ),
        ];
        for (step, result) in toggles {
            match result {
                Ok(()) => {}
                Err(err) if err.is_already_satisfied() => {}
                Err(err) => report.warnings.push(Warning {
                    step,
                    detail: err.to_string(),
                }),
            }
        }

        Ok(report)
    }
}
