use git2::Repository as Git2Repo;
use std::path::Path;

use crate::error::{ReleaseError, Result};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Vcs {
    repo: Git2Repo,
}

impl Git2Vcs {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Vcs { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Vcs { repo }
    }
}

impl super::Vcs for Git2Vcs {
    fn stage(&self, paths: &[&Path]) -> Result<()> {
        let mut index = self.repo.index()?;

        for path in paths {
            index.add_path(path).map_err(|e| {
                ReleaseError::commit(format!("Cannot stage '{}': {}", path.display(), e))
            })?;
        }

        index.write()?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let signature = self
            .repo
            .signature()
            .map_err(|e| ReleaseError::commit(format!("No commit signature available: {}", e)))?;

        // Unborn HEAD means this is the first commit in the repository
        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e)
                if e.code() == git2::ErrorCode::UnbornBranch
                    || e.code() == git2::ErrorCode::NotFound =>
            {
                None
            }
            Err(e) => return Err(e.into()),
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .map_err(|e| ReleaseError::commit(format!("Cannot create commit: {}", e)))?;

        Ok(())
    }
}
