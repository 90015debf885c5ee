//! Result of a link run

use serde::Serialize;

use super::IssueKey;

/// The single emission produced by one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    /// No key was found; a warning was emitted
    Warned {
        /// Warning text
        text: String,
    },
    /// Keys were found; a message with links was emitted
    Linked {
        /// Message text
        text: String,
        /// Keys in order of appearance, repeats included
        keys: Vec<IssueKey>,
    },
}

impl Outcome {
    /// Text that was emitted
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Warned { text } | Self::Linked { text, .. } => text,
        }
    }

    /// Matched keys (empty for a warning)
    #[must_use]
    pub fn keys(&self) -> &[IssueKey] {
        match self {
            Self::Warned { .. } => &[],
            Self::Linked { keys, .. } => keys,
        }
    }

    /// Whether this run ended with the missing-key warning
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::Warned { .. })
    }
}
