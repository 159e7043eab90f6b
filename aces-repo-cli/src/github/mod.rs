//! GitHub as the hosting-platform collaborator
//!
//! [`RepoHost`] is the seam: the configurator and orchestrator only see the
//! trait, so tests substitute an in-memory host. [`GithubHost`] is the ureq
//! implementation against the REST API.

pub mod configure;
pub mod desired;

pub use configure::{ConfigReport, RemoteConfigurator, Warning};
pub use desired::{BranchProtection, Label, RemoteDesiredState, RepoSettings};

use thiserror::Error;

/// GitHub organization hosting all ACES repos
pub const GITHUB_ORG: &str = "aces-framework";

const API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("aces-repo-cli/", env!("CARGO_PKG_VERSION"));

/// Failure reported by the hosting platform
#[derive(Debug, Error)]
pub enum HostError {
    /// Non-success HTTP status from the API
    #[error("GitHub returned HTTP {0}")]
    Status(u16),
    /// Transport-level failure (DNS, TLS, timeout, ...)
    #[error("GitHub request failed: {0}")]
    Transport(String),
    /// No credentials available for authenticated calls
    #[error("GITHUB_TOKEN is not set")]
    MissingToken,
}

impl HostError {
    /// True when the failure means the resource already exists or the
    /// feature is already enabled — success for an idempotent apply.
    #[must_use]
    pub const fn is_already_satisfied(&self) -> bool {
        matches!(self, Self::Status(409 | 422))
    }
}

/// Operations consumed from the hosting platform's management API
///
/// `repo` is the full `owner/name` identifier. Authentication is the
/// implementation's concern.
pub trait RepoHost {
    /// Create a repository in an organization.
    ///
    /// # Errors
    ///
    /// [`HostError`] on any API failure; a 422 for an existing repo is
    /// surfaced so callers can treat re-runs as success.
    fn create_repo(
        &self,
        org: &str,
        name: &str,
        private: bool,
        description: &str,
    ) -> Result<(), HostError>;

    /// Apply repository-level settings as absolute values.
    ///
    /// # Errors
    ///
    /// [`HostError`] on any API failure.
    fn update_repo_settings(&self, repo: &str, settings: &RepoSettings) -> Result<(), HostError>;

    /// Replace the topic set wholesale.
    ///
    /// # Errors
    ///
    /// [`HostError`] on any API failure.
    fn replace_topics(&self, repo: &str, topics: &[String]) -> Result<(), HostError>;

    /// Create one label.
    ///
    /// # Errors
    ///
    /// [`HostError`]; 422 means the label already exists.
    fn create_label(&self, repo: &str, label: &Label) -> Result<(), HostError>;

    /// Replace branch protection on `branch` with the full desired rule.
    ///
    /// # Errors
    ///
    /// [`HostError`] on any API failure.
    fn put_branch_protection(
        &self,
        repo: &str,
        branch: &str,
        rule: &BranchProtection,
    ) -> Result<(), HostError>;

    /// Enable dependency vulnerability alerts.
    ///
    /// # Errors
    ///
    /// [`HostError`]; already-enabled responds with success upstream.
    fn enable_vulnerability_alerts(&self, repo: &str) -> Result<(), HostError>;

    /// Enable private vulnerability reporting.
    ///
    /// # Errors
    ///
    /// [`HostError`]; already-enabled responds with success upstream.
    fn enable_private_vulnerability_reporting(&self, repo: &str) -> Result<(), HostError>;
}

/// ureq-backed [`RepoHost`] against the GitHub REST API
pub struct GithubHost {
    agent: ureq::Agent,
    token: String,
    api_base: String,
}

impl GithubHost {
    /// Build a host authenticated from the `GITHUB_TOKEN` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// [`HostError::MissingToken`] when the variable is unset or empty.
    pub fn from_env() -> Result<Self, HostError> {
        let token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or(HostError::MissingToken)?;
        Ok(Self {
            agent: ureq::Agent::new_with_defaults(),
            token,
            api_base: API_BASE.to_string(),
        })
    }

    fn send_json(
        &self,
        method: &str,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<(), HostError> {
        let url = format!("{}{path}", self.api_base);
        let request = match method {
            "PATCH" => self.agent.patch(&url),
            "POST" => self.agent.post(&url),
            _ => self.agent.put(&url),
        };
        map_result(
            request
                .header("authorization", format!("Bearer {}", self.token))
                .header("accept", "application/vnd.github+json")
                .header("x-github-api-version", "2022-11-28")
                .header("user-agent", USER_AGENT)
                .send_json(body),
        )
    }

    fn put_empty(&self, path: &str) -> Result<(), HostError> {
        let url = format!("{}{path}", self.api_base);
        map_result(
            self.agent
                .put(&url)
                .header("authorization", format!("Bearer {}", self.token))
                .header("accept", "application/vnd.github+json")
                .header("x-github-api-version", "2022-11-28")
                .header("user-agent", USER_AGENT)
                .send_empty(),
        )
    }
}

fn map_result<T>(result: Result<T, ureq::Error>) -> Result<(), HostError> {
    match result {
        Ok(_) => Ok(()),
        Err(ureq::Error::StatusCode(code)) => Err(HostError::Status(code)),
        Err(err) => Err(HostError::Transport(err.to_string())),
    }
}

impl RepoHost for GithubHost {
    fn create_repo(
        &self,
        org: &str,
        name: &str,
        private: bool,
        description: &str,
    ) -> Result<(), HostError> {
        self.send_json(
            "POST",
            &format!("/orgs/{org}/repos"),
            &serde_json::json!({
                "name": name,
                "private": private,
                "description": description,
                "has_wiki": false,
                "has_projects": false,
            }),
        )
    }

    fn update_repo_settings(&self, repo: &str, settings: &RepoSettings) -> Result<(), HostError> {
        self.send_json(
            "PATCH",
            &format!("/repos/{repo}"),
            &serde_json::to_value(settings).map_err(|err| HostError::Transport(err.to_string()))?,
        )
    }

    fn replace_topics(&self, repo: &str, topics: &[String]) -> Result<(), HostError> {
        self.send_json(
            "PUT",
            &format!("/repos/{repo}/topics"),
            &serde_json::json!({ "names": topics }),
        )
    }

    fn create_label(&self, repo: &str, label: &Label) -> Result<(), HostError> {
        self.send_json(
            "POST",
            &format!("/repos/{repo}/labels"),
            &serde_json::to_value(label).map_err(|err| HostError::Transport(err.to_string()))?,
        )
    }

    fn put_branch_protection(
        &self,
        repo: &str,
        branch: &str,
        rule: &BranchProtection,
    ) -> Result<(), HostError> {
        self.send_json(
            "PUT",
            &format!("/repos/{repo}/branches/{branch}/protection"),
            &serde_json::to_value(rule).map_err(|err| HostError::Transport(err.to_string()))?,
        )
    }

    fn enable_vulnerability_alerts(&self, repo: &str) -> Result<(), HostError> {
        self.put_empty(&format!("/repos/{repo}/vulnerability-alerts"))
    }

    fn enable_private_vulnerability_reporting(&self, repo: &str) -> Result<(), HostError> {
        self.put_empty(&format!("/repos/{repo}/private-vulnerability-reporting"))
    }
}
