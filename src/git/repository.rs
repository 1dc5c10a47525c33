#![allow(clippy::missing_errors_doc)]

use crate::error::{GltError, Result};
use crate::git::commit::{CommitData, CommitId};
use git2::{Repository as Git2Repository, RepositoryState};
use std::path::Path;
use tracing::debug;

/// Wrapper around `git2::Repository` with convenience methods for glt
pub struct Repository {
    inner: Git2Repository,
}

impl Repository {
    /// Open a repository at the given path
    ///
    /// # Errors
    /// Returns an error if the path is not a git repository or the repository is in an invalid state.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let inner = Git2Repository::discover(path)
            .map_err(|_| GltError::NotARepository(path.display().to_string()))?;

        let repo = Self { inner };
        repo.validate_state()?;
        Ok(repo)
    }

    /// Open a repository at the current directory
    pub fn open_current_dir() -> Result<Self> {
        Self::open(".")
    }

    /// Validate that no other history operation is in progress
    fn validate_state(&self) -> Result<()> {
        match self.inner.state() {
            RepositoryState::Clean => Ok(()),
            RepositoryState::Rebase
            | RepositoryState::RebaseInteractive
            | RepositoryState::RebaseMerge => Err(GltError::RebaseInProgress),
            RepositoryState::Merge => Err(GltError::MergeInProgress),
            _ => Err(GltError::RewriteFailed(
                "Repository is in an unsupported state".to_string(),
            )),
        }
    }

    /// Get the current branch name ("HEAD" when detached)
    pub fn current_branch_name(&self) -> Result<String> {
        let head = self.inner.head()?;
        if !head.is_branch() {
            return Ok("HEAD".to_string());
        }
        Ok(head.shorthand().unwrap_or("HEAD").to_string())
    }

    /// Check if the current branch has an upstream
    pub fn has_upstream(&self) -> Result<bool> {
        let head = self.inner.head()?;
        if !head.is_branch() {
            return Ok(false);
        }

        let branch_name = head.shorthand().unwrap_or("");
        let branch = self
            .inner
            .find_branch(branch_name, git2::BranchType::Local)?;
        Ok(branch.upstream().is_ok())
    }

    /// Load commits from HEAD, newest first, up to the specified limit
    pub fn load_commits(&self, limit: usize) -> Result<Vec<CommitData>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;

        let mut commits = Vec::new();
        for oid_result in revwalk.take(limit) {
            let oid = oid_result?;
            let commit = self.inner.find_commit(oid)?;
            commits.push(CommitData::from_git2_commit(&commit));
        }

        if commits.is_empty() {
            return Err(GltError::NoCommits);
        }

        debug!(count = commits.len(), limit, "loaded commits");
        Ok(commits)
    }

    /// Get the inner git2 repository (for rewriting operations)
    #[must_use]
    pub fn inner(&self) -> &Git2Repository {
        &self.inner
    }

    /// Record the tip a branch had before it was rewritten
    ///
    /// Returns the name of the reference. An existing backup is left alone so
    /// the oldest pre-rewrite tip survives repeated edits.
    pub fn create_backup_ref(&self, branch_name: &str, old_tip: CommitId) -> Result<String> {
        let backup_ref = format!("refs/original/heads/{branch_name}");
        if self.inner.find_reference(&backup_ref).is_err() {
            self.inner.reference(
                &backup_ref,
                old_tip.0,
                false,
                "glt: backup of rewritten branch",
            )?;
        }

        Ok(backup_ref)
    }
}
