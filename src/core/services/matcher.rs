//! Issue key matcher - finds `PREFIX-NUMBER` tokens in text
//!
//! This module contains pure matching logic with no I/O dependencies.

use log::debug;
use regex::Regex;

use super::validator::validate_project_keys;
use crate::core::LinkError;
use crate::core::models::IssueKey;

/// Compiled matcher for a set of project keys
///
/// The pattern is the keys joined as an alternation, in configured order,
/// followed by a hyphen and one or more ASCII digits, matched
/// case-insensitively. Keys are escaped, so `A.B` only matches a literal dot.
#[derive(Debug, Clone)]
pub struct KeyMatcher {
    regex: Regex,
}

impl KeyMatcher {
    /// Build a matcher, validating the key list first
    pub fn new<S: AsRef<str>>(project_keys: &[S]) -> Result<Self, LinkError> {
        validate_project_keys(project_keys)?;

        let alternation = project_keys
            .iter()
            .map(|key| regex::escape(key.as_ref().trim()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!("(?i)(?:{alternation})-[0-9]+");
        debug!("Issue key pattern: {pattern}");

        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Find every key in `text`, left to right
    ///
    /// Matches do not overlap. Repeated keys are all returned and the casing
    /// of the source text is kept.
    #[must_use]
    pub fn find_keys(&self, text: &str) -> Vec<IssueKey> {
        self.regex.find_iter(text).map(|m| IssueKey::new(m.as_str())).collect()
    }

    /// The compiled pattern
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}
