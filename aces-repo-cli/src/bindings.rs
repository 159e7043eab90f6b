//! Ordered placeholder bindings
//!
//! Tokens are applied longest-first so that a token containing another
//! token as a substring (`aces-REPO_NAME` contains `REPO_NAME`) is always
//! resolved before the shorter one can fire inside it. Token pairs that
//! overlap without a substring relationship have no safe ordering and are
//! rejected at construction time.

use chrono::{Datelike, Utc};

use crate::error::AcesRepoError;
use crate::spec::RepoSpec;

/// An ordered token → replacement map, longest token first
#[derive(Debug, Clone)]
pub struct PlaceholderBindings {
    entries: Vec<(String, String)>,
}

impl PlaceholderBindings {
    /// Build bindings from token/value pairs.
    ///
    /// # Errors
    ///
    /// Returns [`AcesRepoError::Configuration`] for empty or duplicate
    /// tokens, or for a pair of tokens that overlap ambiguously.
    pub fn new(pairs: Vec<(String, String)>) -> Result<Self, AcesRepoError> {
        for (token, _) in &pairs {
            if token.is_empty() {
                return Err(AcesRepoError::Configuration(
                    "placeholder token must not be empty".into(),
                ));
            }
        }
        for (i, (a, _)) in pairs.iter().enumerate() {
            for (b, _) in &pairs[i + 1..] {
                if a == b {
                    return Err(AcesRepoError::Configuration(format!(
                        "duplicate placeholder token '{a}'"
                    )));
                }
                if tokens_overlap_ambiguously(a, b) {
                    return Err(AcesRepoError::Configuration(format!(
                        "placeholder tokens '{a}' and '{b}' overlap without \
                         one containing the other; no substitution order is safe"
                    )));
                }
            }
        }

        let mut entries = pairs;
        // Longest first; ties broken lexicographically for determinism.
        entries.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        Ok(Self { entries })
    }

    /// The standard binding set for one repo spec
    ///
    /// # Errors
    ///
    /// Returns [`AcesRepoError::Configuration`] if the built-in token set
    /// ever becomes internally ambiguous.
    pub fn for_spec(spec: &RepoSpec) -> Result<Self, AcesRepoError> {
        Self::new(vec![
            ("aces-REPO_NAME".into(), spec.name.clone()),
            ("aces_REPO_NAME".into(), spec.underscored()),
            ("REPO_NAME".into(), spec.name.clone()),
            ("REPO_DESCRIPTION".into(), spec.description_text().into()),
            ("YYYY".into(), Utc::now().year().to_string()),
        ])
    }

    /// Bindings in application order (longest token first)
    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

/// True when the tokens can overlap in text with neither containing the
/// other, i.e. a suffix of one equals a prefix of the other.
fn tokens_overlap_ambiguously(a: &str, b: &str) -> bool {
    if a.contains(b) || b.contains(a) {
        return false;
    }
    has_suffix_prefix_overlap(a, b) || has_suffix_prefix_overlap(b, a)
}

fn has_suffix_prefix_overlap(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    (1..a.len().min(b.len())).any(|k| a[a.len() - k..] == b[..k])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::RepoType;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(t, v)| ((*t).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn orders_longest_token_first() {
        let bindings = PlaceholderBindings::new(pairs(&[
            ("REPO_NAME", "aces-schema"),
            ("aces_REPO_NAME", "aces_schema"),
            ("aces-REPO_NAME", "aces-schema"),
        ]))
        .unwrap();
        let tokens: Vec<&str> = bindings
            .entries()
            .iter()
            .map(|(t, _)| t.as_str())
            .collect();
        assert_eq!(tokens, ["aces-REPO_NAME", "aces_REPO_NAME", "REPO_NAME"]);
    }

    #[test]
    fn standard_set_is_unambiguous() {
        let spec = RepoSpec::new("aces-schema", RepoType::Rust, None).unwrap();
        let bindings = PlaceholderBindings::for_spec(&spec).unwrap();
        assert_eq!(bindings.entries().len(), 5);
        assert_eq!(bindings.entries()[0].0, "REPO_DESCRIPTION");
    }

    #[test]
    fn rejects_ambiguous_overlap() {
        // "ABBA" and "BAAB" overlap: ...ABBA|AB... shares "BA"/"AB" edges.
        let err = PlaceholderBindings::new(pairs(&[("ABBA", "x"), ("BAAB", "y")])).unwrap_err();
        assert!(matches!(err, AcesRepoError::Configuration(_)));
    }

    #[test]
    fn substring_tokens_are_not_ambiguous() {
        assert!(!tokens_overlap_ambiguously("aces-REPO_NAME", "REPO_NAME"));
        assert!(!tokens_overlap_ambiguously("REPO_NAME", "REPO_DESCRIPTION"));
    }

    #[test]
    fn rejects_duplicate_and_empty_tokens() {
        assert!(PlaceholderBindings::new(pairs(&[("A_X", "1"), ("A_X", "2")])).is_err());
        assert!(PlaceholderBindings::new(pairs(&[("", "1")])).is_err());
    }
}
