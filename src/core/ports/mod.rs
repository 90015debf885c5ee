//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and the code-review host (pull request metadata, comment posting).
//!
//! Implementations live in the `adapters` module.

mod pr_context;
mod review_surface;

pub use pr_context::PullRequestContext;
pub use review_surface::ReviewSurface;

#[cfg(test)]
pub use pr_context::MockPullRequestContext;
#[cfg(test)]
pub use review_surface::MockReviewSurface;
