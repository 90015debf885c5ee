//! Message policy - decides what a run posts
//!
//! A run emits exactly one annotation: a warning when the selected field
//! carries no issue key, otherwise a message linking every key found.

use log::{debug, info};

use super::formatter::format_links;
use super::matcher::KeyMatcher;
use super::source::select_text;
use crate::core::LinkError;
use crate::core::models::{IssueKeyLocation, LinkConfig, Outcome};
use crate::core::ports::{PullRequestContext, ReviewSurface};

/// Default message: the emoji, a space, then the links joined by `", "`
#[must_use]
pub fn default_message(emoji: &str, links: &[String]) -> String {
    format!("{emoji} {}", links.join(", "))
}

/// Warning posted when no key is found
///
/// The example key is built from the first configured project key.
#[must_use]
pub fn missing_key_warning(location: IssueKeyLocation, example_key: &str) -> String {
    format!("Please add the JIRA issue key to the PR {location} (eg. {example_key}-123)")
}

/// Work out the outcome of a run without emitting anything
pub fn evaluate(
    config: &LinkConfig,
    context: &dyn PullRequestContext,
) -> Result<Outcome, LinkError> {
    let matcher = KeyMatcher::new(config.project_keys())?;
    let text = select_text(config.location(), context);
    let keys = matcher.find_keys(&text);
    debug!("Found {} issue key(s) in PR {}: {:?}", keys.len(), config.location(), text);

    if keys.is_empty() {
        let example = config.project_keys().first().map_or("", |key| key.trim());
        return Ok(Outcome::Warned {
            text: missing_key_warning(config.location(), example),
        });
    }

    let links = format_links(config.project_url(), config.link_style(), &keys)?;
    let text = config.formatter().map_or_else(
        || default_message(config.emoji(), &links),
        |formatter| formatter(config.emoji(), links.as_slice()),
    );

    Ok(Outcome::Linked { text, keys })
}

/// Scan the pull request and post the outcome to the review surface
///
/// Fails only on configuration errors, and then before anything is posted.
pub fn check_pull_request(
    config: &LinkConfig,
    context: &dyn PullRequestContext,
    surface: &dyn ReviewSurface,
) -> Result<Outcome, LinkError> {
    let outcome = evaluate(config, context)?;

    match &outcome {
        Outcome::Warned { text } => {
            info!("No issue key in PR {}", config.location());
            surface.warn(text);
        },
        Outcome::Linked { text, keys } => {
            info!("Linking {} issue key(s)", keys.len());
            surface.message(text);
        },
    }

    Ok(outcome)
}
