use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseError, Result};
use crate::git::Vcs;

/// Mock VCS for testing without an actual git repository
///
/// Records staged paths and commit messages so tests can assert on the
/// exact calls the workflow makes.
pub struct MockVcs {
    staged: RefCell<Vec<PathBuf>>,
    commits: RefCell<Vec<String>>,
    fail_commit: bool,
}

impl MockVcs {
    /// Create a mock where every operation succeeds
    pub fn new() -> Self {
        MockVcs {
            staged: RefCell::new(Vec::new()),
            commits: RefCell::new(Vec::new()),
            fail_commit: false,
        }
    }

    /// Create a mock whose commit step fails
    pub fn failing_commit() -> Self {
        MockVcs {
            fail_commit: true,
            ..Self::new()
        }
    }

    /// All paths staged so far, in call order
    pub fn staged_paths(&self) -> Vec<PathBuf> {
        self.staged.borrow().clone()
    }

    /// All commit messages recorded so far
    pub fn commit_messages(&self) -> Vec<String> {
        self.commits.borrow().clone()
    }
}

impl Default for MockVcs {
    fn default() -> Self {
        Self::new()
    }
}

impl Vcs for MockVcs {
    fn stage(&self, paths: &[&Path]) -> Result<()> {
        self.staged
            .borrow_mut()
            .extend(paths.iter().map(|p| p.to_path_buf()));
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        if self.fail_commit {
            return Err(ReleaseError::commit("Simulated commit failure"));
        }

        self.commits.borrow_mut().push(message.to_string());
        Ok(())
    }
}
