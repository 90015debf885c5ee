//! GitHub Actions event adapter
//!
//! Reads the `pull_request` event payload that GitHub Actions writes to the
//! file named by `$GITHUB_EVENT_PATH`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::models::PullRequest;

/// Environment variable naming the event payload file
pub const EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";

/// A `pull_request` / `pull_request_target` event payload
#[derive(Debug, Deserialize)]
pub struct GitHubEvent {
    /// Absent for non pull request events (push, schedule, ...)
    #[serde(default)]
    pull_request: Option<EventPullRequest>,
}

#[derive(Debug, Deserialize)]
struct EventPullRequest {
    title: String,
    head: EventRef,
    #[serde(default)]
    base: Option<EventRef>,
}

#[derive(Debug, Deserialize)]
struct EventRef {
    #[serde(rename = "ref")]
    name: String,
}

impl GitHubEvent {
    /// Parse an event payload
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not valid JSON or lacks the
    /// required pull request fields.
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load an event payload from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("Event payload not found: {}", path.display());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Path from `$GITHUB_EVENT_PATH`, if set and non-empty
    #[must_use]
    pub fn path_from_env() -> Option<PathBuf> {
        std::env::var_os(EVENT_PATH_ENV).filter(|p| !p.is_empty()).map(PathBuf::from)
    }

    /// Pull request metadata carried by the event
    ///
    /// # Errors
    ///
    /// Returns an error for events that are not about a pull request.
    pub fn pull_request(&self) -> anyhow::Result<PullRequest> {
        let Some(pr) = &self.pull_request else {
            anyhow::bail!("Event payload has no pull_request; run on pull_request events");
        };

        let mut result = PullRequest::new(pr.title.clone(), pr.head.name.clone());
        if let Some(base) = &pr.base {
            result = result.with_base_ref(base.name.clone());
        }
        Ok(result)
    }
}
