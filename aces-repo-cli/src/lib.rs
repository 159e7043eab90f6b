//! aces-repo CLI library
//!
//! Scaffolds new ACES framework repositories from the governance template
//! catalog and converges their GitHub configuration (settings, topics,
//! labels, branch protection, vulnerability reporting) to the desired state
//! for their archetype.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod bindings;
pub mod error;
pub mod git;
pub mod github;
pub mod scaffold;
pub mod spec;
pub mod substitute;
pub mod templates;

pub use bindings::PlaceholderBindings;
pub use error::AcesRepoError;
pub use scaffold::Materializer;
pub use spec::{RepoSpec, RepoType};
