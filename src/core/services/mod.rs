//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and emit through the [`ReviewSurface`](crate::core::ports::ReviewSurface) port.
//!
//! - [`validator`] - Reject unusable project key lists
//! - [`source`] - Pick the pull request field to scan
//! - [`matcher`] - Find issue keys in text
//! - [`formatter`] - Turn keys into issue tracker links
//! - [`policy`] - Decide between warning and message

pub mod formatter;
pub mod matcher;
pub mod policy;
pub mod source;
pub mod validator;

pub use formatter::{format_links, issue_url, render_link};
pub use matcher::KeyMatcher;
pub use policy::{check_pull_request, default_message, evaluate, missing_key_warning};
pub use source::select_text;
pub use validator::validate_project_keys;
