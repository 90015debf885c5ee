//! Settings file handling
//!
//! Settings live in `.prlink.toml` at the repository root (or any parent of
//! the working directory), with `~/.prlink/config.toml` as a fallback:
//!
//! ```toml
//! project_keys = ["PROJ", "OPS"]
//! project_url = "https://jira.example.com/browse"
//! location = "title"
//! emoji = ":link:"
//! link_style = "html"
//!
//! [message]
//! template = "{emoji} Related: {links}"
//! separator = " | "
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::models::{DEFAULT_EMOJI, IssueKeyLocation, LinkConfig, LinkStyle};

/// Contents of a settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Project key prefixes, in order
    #[serde(default)]
    pub project_keys: Vec<String>,
    /// Issue tracker base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    /// Pull request field that must carry the key
    #[serde(default)]
    pub location: IssueKeyLocation,
    /// Emoji for the message
    #[serde(default = "default_emoji")]
    pub emoji: String,
    /// Link markup
    #[serde(default)]
    pub link_style: LinkStyle,
    /// Optional message template replacing the default message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageTemplate>,
}

fn default_emoji() -> String {
    DEFAULT_EMOJI.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_keys: Vec::new(),
            project_url: None,
            location: IssueKeyLocation::default(),
            emoji: default_emoji(),
            link_style: LinkStyle::default(),
            message: None,
        }
    }
}

/// Template for the final message
///
/// `{emoji}` is replaced by the emoji and `{links}` by the links joined with
/// `separator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    /// Template text
    pub template: String,
    /// Separator between links
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    ", ".to_string()
}

impl MessageTemplate {
    /// Fill the template
    ///
    /// Placeholders are substituted in a single left-to-right pass, so text
    /// coming from the emoji or the links is never expanded again.
    #[must_use]
    pub fn render(&self, emoji: &str, links: &[String]) -> String {
        let links = links.join(&self.separator);
        let mut rendered = String::with_capacity(self.template.len() + links.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find('{') {
            rendered.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix("{emoji}") {
                rendered.push_str(emoji);
                rest = after;
            } else if let Some(after) = tail.strip_prefix("{links}") {
                rendered.push_str(&links);
                rest = after;
            } else {
                rendered.push('{');
                rest = &tail[1..];
            }
        }
        rendered.push_str(rest);

        rendered
    }
}

impl Settings {
    /// Parse settings from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this schema.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("Settings file not found: {}", path.display());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid settings in {}: {e}", path.display()))
    }

    /// Serialize settings as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Build the core configuration
    ///
    /// Project keys are trimmed but not otherwise checked here; an empty list
    /// is reported by the run itself.
    ///
    /// # Errors
    ///
    /// Returns an error if `project_url` is missing or not an absolute URL.
    pub fn to_link_config(&self) -> anyhow::Result<LinkConfig> {
        let Some(raw_url) = self.project_url.as_deref() else {
            anyhow::bail!("project_url is not set");
        };
        let url = Url::parse(raw_url.trim())
            .map_err(|e| anyhow::anyhow!("Invalid project_url {raw_url:?}: {e}"))?;

        let keys = self.project_keys.iter().map(|k| k.trim().to_string());
        let mut config = LinkConfig::new(keys, url, self.location)
            .with_emoji(self.emoji.clone())
            .with_link_style(self.link_style);

        if let Some(template) = self.message.clone() {
            config = config.with_formatter(move |emoji, links| template.render(emoji, links));
        }

        Ok(config)
    }
}
