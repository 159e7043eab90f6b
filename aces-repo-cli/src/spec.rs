//! Repo archetypes and validated creation requests

use std::fmt;
use std::str::FromStr;

use crate::error::AcesRepoError;

/// Repository naming prefix mandated by the governance standards
pub const NAME_PREFIX: &str = "aces-";

/// Repo archetype, drawn from a closed set
///
/// Each archetype selects its own template subset and desired GitHub
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RepoType {
    /// Rust crate (Cargo, cargo-deny, toolchain pin)
    Rust,
    /// Python package (uv, ruff, strict mypy)
    Python,
    /// Governance / documentation repo (ADRs, RFCs)
    Governance,
}

impl RepoType {
    /// Lowercase name as used on the command line and in topics
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Python => "python",
            Self::Governance => "governance",
        }
    }

    /// Name of the CI job the archetype's workflow defines
    ///
    /// This is also the required status check in branch protection.
    #[must_use]
    pub const fn ci_job(self) -> &'static str {
        match self {
            Self::Rust | Self::Python => "check",
            Self::Governance => "lint",
        }
    }
}

impl fmt::Display for RepoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepoType {
    type Err = AcesRepoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rust" => Ok(Self::Rust),
            "python" => Ok(Self::Python),
            "governance" => Ok(Self::Governance),
            other => Err(AcesRepoError::Configuration(format!(
                "unknown repo type '{other}'; expected rust, python, or governance"
            ))),
        }
    }
}

/// A validated request to create one repository
///
/// Immutable once constructed; everything downstream (placeholder bindings,
/// template selection, desired remote state) derives from it.
#[derive(Debug, Clone)]
pub struct RepoSpec {
    /// Full repository name, e.g. `aces-schema`
    pub name: String,
    /// Archetype selecting templates and remote configuration
    pub repo_type: RepoType,
    /// Optional free-text description
    pub description: Option<String>,
}

impl RepoSpec {
    /// Validate the name against the archetype's naming rule and build the
    /// spec.
    ///
    /// # Errors
    ///
    /// Returns [`AcesRepoError::Configuration`] when the name violates the
    /// naming convention. Nothing is mutated on failure.
    pub fn new(
        name: impl Into<String>,
        repo_type: RepoType,
        description: Option<String>,
    ) -> Result<Self, AcesRepoError> {
        let name = name.into();
        if !is_valid_repo_name(&name, repo_type) {
            return Err(AcesRepoError::Configuration(format!(
                "invalid repo name '{name}': names are lowercase [a-z0-9-] \
                 with the '{NAME_PREFIX}' prefix"
            )));
        }
        Ok(Self {
            name,
            repo_type,
            description,
        })
    }

    /// Name with hyphens replaced by underscores, e.g. `aces_schema`
    ///
    /// Used wherever an identifier is needed (Cargo lib name, Python
    /// package directory).
    #[must_use]
    pub fn underscored(&self) -> String {
        self.name.replace('-', "_")
    }

    /// Description to substitute into templates
    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or("Part of the ACES framework.")
    }
}

/// Check a repo name against the archetype's naming rule
///
/// All archetypes require the `aces-` prefix with a non-empty suffix; the
/// governance archetype additionally accepts the bare hub name `aces`.
#[must_use]
pub fn is_valid_repo_name(name: &str, repo_type: RepoType) -> bool {
    if repo_type == RepoType::Governance && name == "aces" {
        return true;
    }
    let Some(suffix) = name.strip_prefix(NAME_PREFIX) else {
        return false;
    };
    if suffix.is_empty() || name.ends_with('-') {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_prefixed_names() {
        assert!(is_valid_repo_name("aces-schema", RepoType::Rust));
        assert!(is_valid_repo_name("aces-agent-sdk", RepoType::Python));
        assert!(is_valid_repo_name("aces-provider-docker", RepoType::Rust));
    }

    #[test]
    fn rejects_unprefixed_or_malformed_names() {
        assert!(!is_valid_repo_name("schema", RepoType::Rust));
        assert!(!is_valid_repo_name("aces-", RepoType::Rust));
        assert!(!is_valid_repo_name("aces-Schema", RepoType::Rust));
        assert!(!is_valid_repo_name("aces-my repo", RepoType::Rust));
        assert!(!is_valid_repo_name("aces-runtime-", RepoType::Rust));
        assert!(!is_valid_repo_name("", RepoType::Rust));
    }

    #[test]
    fn bare_hub_name_is_governance_only() {
        assert!(is_valid_repo_name("aces", RepoType::Governance));
        assert!(!is_valid_repo_name("aces", RepoType::Rust));
        assert!(!is_valid_repo_name("aces", RepoType::Python));
    }

    #[test]
    fn unknown_type_string_is_a_configuration_error() {
        let err = "invalid-type".parse::<RepoType>().unwrap_err();
        assert!(matches!(err, AcesRepoError::Configuration(_)));
    }

    #[test]
    fn spec_rejects_bad_name_without_side_effects() {
        let err = RepoSpec::new("Bad Name", RepoType::Rust, None).unwrap_err();
        assert!(matches!(err, AcesRepoError::Configuration(_)));
    }

    #[test]
    fn underscored_form() {
        let spec = RepoSpec::new("aces-agent-sdk", RepoType::Python, None).unwrap();
        assert_eq!(spec.underscored(), "aces_agent_sdk");
    }
}
