//! Domain models for prlink
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`LinkConfig`] - Which keys to look for, where, and how to render links
//! - [`IssueKeyLocation`] - Which pull request field is scanned
//! - [`IssueKey`] - A matched `PREFIX-NUMBER` token
//! - [`PullRequest`] - Plain pull request metadata
//! - [`Outcome`] - The single emission of a run

mod config;
mod issue_key;
mod location;
mod outcome;
mod pull_request;

pub use config::{DEFAULT_EMOJI, LinkConfig, LinkStyle, MessageFormatter};
pub use issue_key::IssueKey;
pub use location::IssueKeyLocation;
pub use outcome::Outcome;
pub use pull_request::PullRequest;
