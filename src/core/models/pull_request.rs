//! Pull request metadata

use serde::{Deserialize, Serialize};

use crate::core::ports::PullRequestContext;

/// The pull request fields prlink reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Pull request title
    pub title: String,
    /// Head (source) branch name
    pub head_ref: String,
    /// Base (target) branch name, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_ref: Option<String>,
}

impl PullRequest {
    /// Create pull request metadata from a title and head branch
    #[must_use]
    pub fn new(title: impl Into<String>, head_ref: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            head_ref: head_ref.into(),
            base_ref: None,
        }
    }

    /// Set the base branch
    #[must_use]
    pub fn with_base_ref(mut self, base_ref: impl Into<String>) -> Self {
        self.base_ref = Some(base_ref.into());
        self
    }
}

impl PullRequestContext for PullRequest {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn head_ref(&self) -> String {
        self.head_ref.clone()
    }
}
