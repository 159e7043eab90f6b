//! Remote-configuration contract tests against an in-memory host
//!
//! Exercises the idempotent-apply contract: full-replace semantics for
//! settings/topics/protection, tolerated "already exists" conditions, and
//! the fatal/non-fatal split.

use std::cell::RefCell;

use aces_repo_cli_lib::github::{
    BranchProtection, HostError, Label, RemoteConfigurator, RepoHost, RepoSettings,
};
use aces_repo_cli_lib::spec::RepoType;
use aces_repo_cli_lib::AcesRepoError;

/// Records every call; failure behavior is scripted per test
#[derive(Default)]
struct RecordingHost {
    calls: RefCell<Vec<String>>,
    /// Labels that respond 422 (already exist)
    existing_labels: Vec<&'static str>,
    /// Label that responds 500
    broken_label: Option<&'static str>,
    /// Topics call responds 500
    fail_topics: bool,
    /// Private-vulnerability toggle responds 409 (already enabled)
    reporting_already_enabled: bool,
    /// Review counts seen in protection payloads, in order
    review_counts: RefCell<Vec<u32>>,
    /// Topic sets seen, in order
    topic_sets: RefCell<Vec<Vec<String>>>,
}

impl RecordingHost {
    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }
}

impl RepoHost for RecordingHost {
    fn create_repo(
        &self,
        org: &str,
        name: &str,
        _private: bool,
        _description: &str,
    ) -> Result<(), HostError> {
        self.record(format!("create {org}/{name}"));
        Ok(())
    }

    fn update_repo_settings(&self, _repo: &str, _settings: &RepoSettings) -> Result<(), HostError> {
        self.record("settings");
        Ok(())
    }

    fn replace_topics(&self, _repo: &str, topics: &[String]) -> Result<(), HostError> {
        if self.fail_topics {
            return Err(HostError::Status(500));
        }
        self.record("topics");
        self.topic_sets.borrow_mut().push(topics.to_vec());
        Ok(())
    }

    fn create_label(&self, _repo: &str, label: &Label) -> Result<(), HostError> {
        if self.existing_labels.contains(&label.name) {
            return Err(HostError::Status(422));
        }
        if self.broken_label == Some(label.name) {
            return Err(HostError::Status(500));
        }
        self.record(format!("label {}", label.name));
        Ok(())
    }

    fn put_branch_protection(
        &self,
        _repo: &str,
        branch: &str,
        rule: &BranchProtection,
    ) -> Result<(), HostError> {
        self.record(format!("protect {branch}"));
        self.review_counts.borrow_mut().push(
            rule.required_pull_request_reviews
                .required_approving_review_count,
        );
        Ok(())
    }

    fn enable_vulnerability_alerts(&self, _repo: &str) -> Result<(), HostError> {
        self.record("vuln-alerts");
        Ok(())
    }

    fn enable_private_vulnerability_reporting(&self, _repo: &str) -> Result<(), HostError> {
        if self.reporting_already_enabled {
            return Err(HostError::Status(409));
        }
        self.record("private-reporting");
        Ok(())
    }
}

#[test]
fn configure_twice_converges_to_the_same_state() {
    let host = RecordingHost::default();
    let configurator = RemoteConfigurator::new(&host);

    let first = configurator
        .configure("aces-framework/aces-demo", RepoType::Rust)
        .unwrap();
    let second = configurator
        .configure("aces-framework/aces-demo", RepoType::Rust)
        .unwrap();

    assert!(first.is_clean());
    assert!(second.is_clean());

    let topic_sets = host.topic_sets.borrow();
    assert_eq!(topic_sets.len(), 2);
    assert_eq!(topic_sets[0], topic_sets[1]);

    let review_counts = host.review_counts.borrow();
    assert_eq!(review_counts.as_slice(), &[0, 0]);
}

#[test]
fn existing_labels_are_success_not_warnings() {
    let host = RecordingHost {
        existing_labels: vec!["bug", "enhancement", "governance"],
        ..RecordingHost::default()
    };
    let report = RemoteConfigurator::new(&host)
        .configure("aces-framework/aces-demo", RepoType::Python)
        .unwrap();
    assert!(report.is_clean());
}

#[test]
fn label_server_error_is_a_warning_and_protection_still_applies() {
    let host = RecordingHost {
        broken_label: Some("adr"),
        ..RecordingHost::default()
    };
    let report = RemoteConfigurator::new(&host)
        .configure("aces-framework/aces-demo", RepoType::Rust)
        .unwrap();

    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].step, "labels");
    assert!(report.warnings[0].detail.contains("adr"));
    assert!(host
        .calls
        .borrow()
        .iter()
        .any(|c| c.starts_with("protect")));
}

#[test]
fn topics_failure_is_fatal() {
    let host = RecordingHost {
        fail_topics: true,
        ..RecordingHost::default()
    };
    let err = RemoteConfigurator::new(&host)
        .configure("aces-framework/aces-demo", RepoType::Rust)
        .unwrap_err();

    assert!(matches!(
        err,
        AcesRepoError::RemoteConfig { step: "topics", .. }
    ));
    // Fatal failure halts the pipeline before protection is touched.
    assert!(!host.calls.borrow().iter().any(|c| c.starts_with("protect")));
}

#[test]
fn already_enabled_reporting_is_success() {
    let host = RecordingHost {
        reporting_already_enabled: true,
        ..RecordingHost::default()
    };
    let report = RemoteConfigurator::new(&host)
        .configure("aces-framework/aces-demo", RepoType::Governance)
        .unwrap();
    assert!(report.is_clean());
}

/// Full-replace semantics: the protection payload always carries the
/// desired review count, so a remote drifted to 1 required review
/// converges back to 0 on the next run.
#[test]
fn review_count_is_replaced_not_merged() {
    let host = RecordingHost::default();
    let configurator = RemoteConfigurator::new(&host);

    configurator
        .configure("aces-framework/aces-demo", RepoType::Rust)
        .unwrap();

    assert_eq!(host.review_counts.borrow().as_slice(), &[0]);
}

#[test]
fn governance_protection_requires_one_review() {
    let host = RecordingHost::default();
    RemoteConfigurator::new(&host)
        .configure("aces-framework/aces", RepoType::Governance)
        .unwrap();
    assert_eq!(host.review_counts.borrow().as_slice(), &[1]);
}
