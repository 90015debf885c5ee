//! Link configuration
//!
//! Everything one run needs besides the pull request itself: the project
//! keys to look for, the issue tracker to link to, the field to scan and
//! how the final message is rendered.

use serde::{Deserialize, Serialize};
use url::Url;

use super::IssueKeyLocation;

/// Emoji placed before the default message
pub const DEFAULT_EMOJI: &str = ":link:";

/// Custom message formatter, called with the emoji and the rendered links
pub type MessageFormatter = Box<dyn Fn(&str, &[String]) -> String>;

/// Markup used for each issue link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// `<a href='URL'>KEY</a>`
    #[default]
    Html,
    /// `[KEY](URL)`
    Markdown,
}

impl std::fmt::Display for LinkStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Immutable configuration for a link run
///
/// Project keys are kept in the order given; the first one is used for the
/// example in the missing-key warning. Emptiness is checked when the run
/// starts, not here, so that a bad configuration surfaces as
/// [`LinkError::MissingProjectKey`](crate::core::LinkError::MissingProjectKey).
pub struct LinkConfig {
    project_keys: Vec<String>,
    project_url: Url,
    location: IssueKeyLocation,
    emoji: String,
    link_style: LinkStyle,
    formatter: Option<MessageFormatter>,
}

impl LinkConfig {
    /// Create a configuration with the default emoji, HTML links and no
    /// custom formatter
    pub fn new<I, S>(project_keys: I, project_url: Url, location: IssueKeyLocation) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            project_keys: project_keys.into_iter().map(Into::into).collect(),
            project_url,
            location,
            emoji: DEFAULT_EMOJI.to_string(),
            link_style: LinkStyle::default(),
            formatter: None,
        }
    }

    /// Set the emoji passed to the formatter
    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Set the link markup
    #[must_use]
    pub fn with_link_style(mut self, link_style: LinkStyle) -> Self {
        self.link_style = link_style;
        self
    }

    /// Replace the default `"{emoji} {links}"` message with a custom formatter
    #[must_use]
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&str, &[String]) -> String + 'static,
    {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Configured project keys, in order
    #[must_use]
    pub fn project_keys(&self) -> &[String] {
        &self.project_keys
    }

    /// Issue tracker base URL
    #[must_use]
    pub const fn project_url(&self) -> &Url {
        &self.project_url
    }

    /// Field scanned for keys
    #[must_use]
    pub const fn location(&self) -> IssueKeyLocation {
        self.location
    }

    /// Emoji for the message
    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    /// Link markup
    #[must_use]
    pub const fn link_style(&self) -> LinkStyle {
        self.link_style
    }

    /// Custom formatter, if any
    #[must_use]
    pub fn formatter(&self) -> Option<&MessageFormatter> {
        self.formatter.as_ref()
    }
}

impl std::fmt::Debug for LinkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkConfig")
            .field("project_keys", &self.project_keys)
            .field("project_url", &self.project_url.as_str())
            .field("location", &self.location)
            .field("emoji", &self.emoji)
            .field("link_style", &self.link_style)
            .field("formatter", &self.formatter.as_ref().map(|_| "custom"))
            .finish()
    }
}
