//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing prlink components.

use std::cell::Cell;
use std::fs;
use std::path::Path;

use git2::{Repository, Signature};
use prlink::core::models::{IssueKeyLocation, LinkConfig};
use prlink::core::ports::PullRequestContext;
use tempfile::TempDir;
use url::Url;

/// Issue tracker used throughout the tests
pub const BASE_URL: &str = "https://jira.example.com/browse";

/// Build a configuration pointing at [`BASE_URL`]
pub fn link_config(keys: &[&str], location: IssueKeyLocation) -> LinkConfig {
    LinkConfig::new(keys.iter().copied(), Url::parse(BASE_URL).unwrap(), location)
}

/// Expected HTML link for a key
pub fn html_link(key: &str) -> String {
    format!("<a href='{BASE_URL}/{key}'>{key}</a>")
}

/// Pull request context that counts which fields were read
pub struct CountingContext {
    title: String,
    head_ref: String,
    title_reads: Cell<usize>,
    head_ref_reads: Cell<usize>,
}

impl CountingContext {
    pub fn new(title: &str, head_ref: &str) -> Self {
        Self {
            title: title.to_string(),
            head_ref: head_ref.to_string(),
            title_reads: Cell::new(0),
            head_ref_reads: Cell::new(0),
        }
    }

    pub fn title_reads(&self) -> usize {
        self.title_reads.get()
    }

    pub fn head_ref_reads(&self) -> usize {
        self.head_ref_reads.get()
    }
}

impl PullRequestContext for CountingContext {
    fn title(&self) -> String {
        self.title_reads.set(self.title_reads.get() + 1);
        self.title.clone()
    }

    fn head_ref(&self) -> String {
        self.head_ref_reads.set(self.head_ref_reads.get() + 1);
        self.head_ref.clone()
    }
}

/// A temporary git repository with one commit
pub struct TestRepo {
    dir: TempDir,
    repo: Repository,
}

impl TestRepo {
    /// Create a repository whose first commit has `summary` as message
    pub fn with_commit(summary: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let repo = Repository::init(dir.path()).expect("failed to init repo");

        {
            let sig = Signature::now("Test User", "test@example.com").unwrap();
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, summary, &tree, &[]).unwrap();
        }

        Self { dir, repo }
    }

    /// Create `name` at HEAD and check it out
    pub fn checkout_branch(&self, name: &str) {
        let commit = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo.branch(name, &commit, false).unwrap();
        self.repo.set_head(&format!("refs/heads/{name}")).unwrap();
    }

    /// Point HEAD directly at the current commit
    pub fn detach_head(&self) {
        let oid = self.repo.head().unwrap().target().unwrap();
        self.repo.set_head_detached(oid).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Write `.prlink.toml` into `dir`
pub fn write_settings(dir: &Path, content: &str) {
    fs::write(dir.join(".prlink.toml"), content).unwrap();
}
