//! Desired remote state per archetype
//!
//! Recomputed from the archetype on every run and applied as absolute
//! values, never deltas, so repeated runs converge regardless of drift.

use serde::Serialize;

use crate::git::DEFAULT_BRANCH;
use crate::spec::RepoType;

/// Repository-level settings, applied in a single PATCH
#[derive(Debug, Clone, Serialize)]
pub struct RepoSettings {
    /// Squash-merge pull requests
    pub allow_squash_merge: bool,
    /// Merge commits on pull requests
    pub allow_merge_commit: bool,
    /// Rebase-merge pull requests
    pub allow_rebase_merge: bool,
    /// Delete head branches once merged
    pub delete_branch_on_merge: bool,
    /// Issue tracker enabled
    pub has_issues: bool,
    /// Wiki enabled
    pub has_wiki: bool,
    /// Classic projects enabled
    pub has_projects: bool,
}

/// One issue label
#[derive(Debug, Clone, Serialize)]
pub struct Label {
    /// Label name
    pub name: &'static str,
    /// Six-digit hex color, no leading `#`
    pub color: &'static str,
    /// Short description shown in the label picker
    pub description: &'static str,
}

/// Branch-protection rule, applied as one full-replace PUT
#[derive(Debug, Clone, Serialize)]
pub struct BranchProtection {
    /// Status checks that must pass before merging
    pub required_status_checks: RequiredStatusChecks,
    /// Apply the rule to administrators too
    pub enforce_admins: bool,
    /// Review requirements
    pub required_pull_request_reviews: RequiredReviews,
    /// Push restrictions; always `null` (org-wide rule, no allow-list)
    pub restrictions: Option<()>,
    /// Require signed commits
    pub required_signatures: bool,
    /// Permit force pushes to the protected branch
    pub allow_force_pushes: bool,
    /// Permit deleting the protected branch
    pub allow_deletions: bool,
}

/// Required status checks within a protection rule
#[derive(Debug, Clone, Serialize)]
pub struct RequiredStatusChecks {
    /// Branches must be up to date before merging
    pub strict: bool,
    /// Check contexts that must pass (the archetype's CI job)
    pub contexts: Vec<String>,
}

/// Review requirements within a protection rule
#[derive(Debug, Clone, Serialize)]
pub struct RequiredReviews {
    /// Approving reviews required before merging
    pub required_approving_review_count: u32,
    /// Stale approvals are dismissed on new pushes
    pub dismiss_stale_reviews: bool,
}

/// Everything the remote should look like for one archetype
#[derive(Debug, Clone)]
pub struct RemoteDesiredState {
    /// Repository settings
    pub settings: RepoSettings,
    /// Complete topic set
    pub topics: Vec<String>,
    /// Labels that must exist
    pub labels: Vec<Label>,
    /// Branch to protect
    pub branch: &'static str,
    /// Protection rule for [`Self::branch`]
    pub protection: BranchProtection,
}

/// Labels shared by every ACES repo
const LABELS: &[Label] = &[
    Label {
        name: "governance",
        color: "5319e7",
        description: "Needs governance or cross-repo review",
    },
    Label {
        name: "adr",
        color: "0e8a16",
        description: "Architecture decision record",
    },
    Label {
        name: "bug",
        color: "d73a4a",
        description: "Something is broken",
    },
    Label {
        name: "enhancement",
        color: "a2eeef",
        description: "New feature or improvement",
    },
    Label {
        name: "documentation",
        color: "0075ca",
        description: "Documentation only",
    },
    Label {
        name: "security",
        color: "b60205",
        description: "Security-relevant change",
    },
];

impl RemoteDesiredState {
    /// Derive the desired state for one archetype
    #[must_use]
    pub fn for_type(repo_type: RepoType) -> Self {
        Self {
            settings: RepoSettings {
                allow_squash_merge: true,
                allow_merge_commit: false,
                allow_rebase_merge: false,
                delete_branch_on_merge: true,
                has_issues: true,
                has_wiki: false,
                has_projects: false,
            },
            topics: vec!["aces".to_string(), repo_type.as_str().to_string()],
            labels: LABELS.to_vec(),
            branch: DEFAULT_BRANCH,
            protection: BranchProtection {
                required_status_checks: RequiredStatusChecks {
                    strict: true,
                    contexts: vec![repo_type.ci_job().to_string()],
                },
                enforce_admins: true,
                required_pull_request_reviews: RequiredReviews {
                    // Governance changes need a second pair of eyes; code
                    // repos merge on green CI.
                    required_approving_review_count: match repo_type {
                        RepoType::Governance => 1,
                        RepoType::Rust | RepoType::Python => 0,
                    },
                    dismiss_stale_reviews: true,
                },
                restrictions: None,
                required_signatures: true,
                allow_force_pushes: false,
                allow_deletions: false,
            },
        }
    }
}
