//! Issue key location
//!
//! Selects which pull request field is scanned for issue keys.

use serde::{Deserialize, Serialize};

/// Pull request field that must carry the issue key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKeyLocation {
    /// The pull request title
    #[default]
    Title,
    /// The head (source) branch name
    Branch,
}

impl IssueKeyLocation {
    /// Name used in warnings and configuration files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Branch => "branch",
        }
    }
}

impl std::fmt::Display for IssueKeyLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IssueKeyLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "branch" => Ok(Self::Branch),
            _ => Err(format!("Invalid issue key location: {s}. Use: title, branch")),
        }
    }
}
