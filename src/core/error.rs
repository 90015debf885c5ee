//! Errors raised by the core before anything is emitted

use thiserror::Error;

/// Errors that abort a single link run
///
/// A pull request without any issue key is not an error; it produces a
/// warning through the review surface instead.
#[derive(Debug, Error)]
pub enum LinkError {
    /// No project keys were configured
    #[error("at least one project key is required")]
    MissingProjectKey,

    /// A configured project key is empty or whitespace
    #[error("project key at position {index} is blank")]
    BlankProjectKey {
        /// Zero-based position in the configured key list
        index: usize,
    },

    /// The issue key pattern failed to compile
    #[error("invalid issue key pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The issue tracker URL cannot have path segments appended
    #[error("issue tracker URL cannot be used as a base: {0}")]
    UnsupportedBaseUrl(String),
}
