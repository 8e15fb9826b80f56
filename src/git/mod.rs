//! Version-control abstraction layer.
//!
//! The [Vcs] trait covers the two sub-steps of the commit stage: staging the
//! release files and committing with the generated message. Implementations:
//!
//! - [repository::Git2Vcs]: real implementation over the `git2` crate
//! - [mock::MockVcs]: recording implementation for tests
//!
//! Workflow code depends on the trait so tests can assert on staged paths and
//! commit messages without a real repository.

pub mod mock;
pub mod repository;

pub use mock::MockVcs;
pub use repository::Git2Vcs;

use crate::error::Result;
use std::path::Path;

/// Version-control operations needed by the release workflow.
pub trait Vcs {
    /// Stage the given paths (relative to the repository work directory)
    ///
    /// # Arguments
    /// * `paths` - Files to add to the index
    ///
    /// # Returns
    /// * `Ok(())` - All paths staged
    /// * `Err` - If any path cannot be staged
    fn stage(&self, paths: &[&Path]) -> Result<()>;

    /// Commit the staged changes with the given message
    ///
    /// # Arguments
    /// * `message` - Full commit message
    ///
    /// # Returns
    /// * `Ok(())` - Commit created on HEAD
    /// * `Err` - If the commit cannot be created
    fn commit(&self, message: &str) -> Result<()>;
}
