//! Template materializer
//!
//! Walks the catalog for an archetype, substitutes placeholders, and writes
//! the results under a fresh target directory. A failed run leaves partial
//! output in place; the caller removes the directory before retrying.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bindings::PlaceholderBindings;
use crate::error::AcesRepoError;
use crate::spec::RepoType;
use crate::substitute;
use crate::templates::{catalog_for, TemplateEntry};

/// Writes one archetype's templates into a target directory
pub struct Materializer<'a> {
    bindings: &'a PlaceholderBindings,
}

impl<'a> Materializer<'a> {
    /// Create a materializer over one invocation's bindings
    #[must_use]
    pub const fn new(bindings: &'a PlaceholderBindings) -> Self {
        Self { bindings }
    }

    /// Materialize every template applicable to `repo_type` under `target`.
    ///
    /// The target root must not exist yet; intermediate directories below
    /// it are created as needed.
    ///
    /// # Errors
    ///
    /// [`AcesRepoError::AlreadyExists`] when `target` exists (checked before
    /// any write), [`AcesRepoError::Materialize`] on the first read/write
    /// failure, naming the offending template.
    pub fn materialize(&self, repo_type: RepoType, target: &Path) -> Result<(), AcesRepoError> {
        if target.exists() {
            return Err(AcesRepoError::AlreadyExists(target.to_path_buf()));
        }
        for entry in catalog_for(repo_type) {
            self.write_entry(entry, target)?;
        }
        Ok(())
    }

    fn write_entry(&self, entry: &TemplateEntry, target: &Path) -> Result<(), AcesRepoError> {
        let dest = target.join(self.rendered_dest(entry));
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| AcesRepoError::Materialize {
                template: entry.source_id.to_string(),
                source,
            })?;
        }
        let rendered = substitute::apply(self.bindings, entry.content);
        fs::write(&dest, rendered.as_ref()).map_err(|source| AcesRepoError::Materialize {
            template: entry.source_id.to_string(),
            source,
        })
    }

    /// Destination paths may carry placeholder tokens too (the Python
    /// package directory is `src/aces_REPO_NAME/`).
    fn rendered_dest(&self, entry: &TemplateEntry) -> PathBuf {
        let rendered = substitute::apply(self.bindings, entry.dest.as_bytes());
        PathBuf::from(String::from_utf8_lossy(rendered.as_ref()).into_owned())
    }
}
