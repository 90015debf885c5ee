//! Git checkout adapter
//!
//! Builds pull request metadata from a local repository, so the same check
//! can run before a pull request exists. The current branch stands in for
//! the head ref and the HEAD commit summary for the title.

use std::path::PathBuf;

use log::debug;

use crate::core::models::PullRequest;

/// A local git working copy
#[derive(Debug, Clone)]
pub struct GitCheckout {
    /// Directory inside the repository
    workdir: PathBuf,
}

impl GitCheckout {
    /// Create an adapter for the repository containing `workdir`
    #[must_use]
    pub const fn new(workdir: PathBuf) -> Self {
        Self { workdir }
    }

    /// Create an adapter for the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn current_dir() -> anyhow::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Read branch name and HEAD commit summary
    ///
    /// # Errors
    ///
    /// Fails outside a repository, on an unborn branch, or with a detached HEAD.
    pub fn pull_request(&self) -> anyhow::Result<PullRequest> {
        let repo = git2::Repository::discover(&self.workdir)?;
        let head = repo.head()?;

        if !head.is_branch() {
            anyhow::bail!("HEAD is detached; check out a branch first");
        }

        let Some(branch) = head.shorthand().map(String::from) else {
            anyhow::bail!("Branch name is not valid UTF-8");
        };
        let commit = head.peel_to_commit()?;
        let title = commit.summary().unwrap_or_default().to_string();
        debug!("Local checkout: branch {branch:?}, HEAD summary {title:?}");

        Ok(PullRequest::new(title, branch))
    }
}
