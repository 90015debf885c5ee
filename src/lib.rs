//! prlink - Link issue-tracker keys found in pull requests
//!
//! Scans a pull request's title or head branch for issue keys such as
//! `PROJ-123` and posts one comment linking each key to the issue tracker,
//! or a warning asking the author to add one.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;

pub use crate::core::LinkError;
pub use crate::core::models::{IssueKey, IssueKeyLocation, LinkConfig, LinkStyle, Outcome, PullRequest};
pub use crate::core::ports::{PullRequestContext, ReviewSurface};
pub use crate::core::services::{check_pull_request, evaluate};
