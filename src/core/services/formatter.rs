//! Issue link formatting

use url::Url;

use crate::core::LinkError;
use crate::core::models::{IssueKey, LinkStyle};

/// Build the issue URL by appending the key as a path segment
///
/// A trailing slash on the base is absorbed, so both
/// `https://jira.example.com/browse` and `https://jira.example.com/browse/`
/// give `https://jira.example.com/browse/PROJ-1`.
pub fn issue_url(base: &Url, key: &IssueKey) -> Result<Url, LinkError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| LinkError::UnsupportedBaseUrl(base.to_string()))?
        .pop_if_empty()
        .push(key.as_str());
    Ok(url)
}

/// Render one link token with the key as visible text
///
/// HTML links escape both the attribute value and the text, so keys holding
/// markup characters stay inert.
#[must_use]
pub fn render_link(style: LinkStyle, url: &Url, key: &IssueKey) -> String {
    match style {
        LinkStyle::Html => {
            format!("<a href='{}'>{}</a>", html_escape(url.as_str()), html_escape(key.as_str()))
        },
        LinkStyle::Markdown => format!("[{key}]({url})"),
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render one link per key, in match order
pub fn format_links(
    base: &Url,
    style: LinkStyle,
    keys: &[IssueKey],
) -> Result<Vec<String>, LinkError> {
    keys.iter()
        .map(|key| issue_url(base, key).map(|url| render_link(style, &url, key)))
        .collect()
}
