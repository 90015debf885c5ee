//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `github` - GitHub Actions `pull_request` event payloads
//! - `git` - Local checkout (branch name and HEAD commit summary)
//! - `surface` - Console and in-memory review surfaces

pub mod git;
pub mod github;
pub mod surface;

pub use git::GitCheckout;
pub use github::GitHubEvent;
pub use surface::{ConsoleSurface, Emission, RecordingSurface};
