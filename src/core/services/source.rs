//! Text source selection

use crate::core::models::IssueKeyLocation;
use crate::core::ports::PullRequestContext;

/// Return the pull request text that must carry the issue key
///
/// Only the selected field is read; the two sources are never combined.
pub fn select_text(location: IssueKeyLocation, context: &dyn PullRequestContext) -> String {
    match location {
        IssueKeyLocation::Title => context.title(),
        IssueKeyLocation::Branch => context.head_ref(),
    }
}
