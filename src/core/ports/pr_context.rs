//! Pull request context port
//!
//! Read-only view of the pull request under review.

/// Pull request metadata supplied by the review host
///
/// Values are already fetched; implementations must not block.
#[cfg_attr(test, mockall::automock)]
pub trait PullRequestContext {
    /// Pull request title
    fn title(&self) -> String;

    /// Head (source) branch name, not the base branch
    fn head_ref(&self) -> String;
}
