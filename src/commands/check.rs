//! Check a pull request for issue keys

use std::path::PathBuf;

use log::debug;

use prlink::adapters::{GitCheckout, GitHubEvent, RecordingSurface};
use prlink::config::Settings;
use prlink::core::models::{IssueKeyLocation, LinkStyle, PullRequest};
use prlink::core::services::check_pull_request;
use prlink::output::{LinkReport, OutputMode};
use prlink::paths;

use crate::cli::CheckArgs;

/// Run the issue key check and print the resulting annotation
pub fn check(args: &CheckArgs, mode: OutputMode) -> anyhow::Result<()> {
    let settings = resolve_settings(args)?;
    let config = settings.to_link_config()?;
    let pull_request = resolve_pull_request(args)?;

    let surface = RecordingSurface::new();
    let outcome = check_pull_request(&config, &pull_request, &surface)?;

    LinkReport::new(config.location(), &outcome, surface.emissions()).render(mode);
    Ok(())
}

/// Load the settings file and apply command-line overrides
fn resolve_settings(args: &CheckArgs) -> anyhow::Result<Settings> {
    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => paths::locate_config(&std::env::current_dir()?),
    };

    let mut settings = match path {
        Some(path) => {
            debug!("Loading settings from {}", path.display());
            Settings::load(&path)?
        },
        None if !args.keys.is_empty() && args.url.is_some() => Settings::default(),
        None => anyhow::bail!(
            "No {} found; run 'prlink init' or pass --key and --url",
            paths::PRLINK_TOML
        ),
    };

    if !args.keys.is_empty() {
        settings.project_keys.clone_from(&args.keys);
    }
    if let Some(url) = &args.url {
        settings.project_url = Some(url.clone());
    }
    if let Some(location) = &args.location {
        settings.location = location.parse::<IssueKeyLocation>().map_err(anyhow::Error::msg)?;
    }
    if let Some(emoji) = &args.emoji {
        settings.emoji.clone_from(emoji);
    }
    if args.markdown {
        settings.link_style = LinkStyle::Markdown;
    }

    Ok(settings)
}

/// Pick the pull request source
///
/// Explicit flags come first (`--title`/`--branch`, then `--event` or `--local`);
/// `$GITHUB_EVENT_PATH` is only consulted when none of them is given.
fn resolve_pull_request(args: &CheckArgs) -> anyhow::Result<PullRequest> {
    if args.title.is_some() || args.branch.is_some() {
        return Ok(PullRequest::new(
            args.title.clone().unwrap_or_default(),
            args.branch.clone().unwrap_or_default(),
        ));
    }

    if args.local {
        return GitCheckout::current_dir()?.pull_request();
    }

    let event_path: Option<PathBuf> = args.event.clone().or_else(GitHubEvent::path_from_env);
    if let Some(path) = event_path {
        debug!("Reading pull request from {}", path.display());
        return GitHubEvent::load(&path)?.pull_request();
    }

    anyhow::bail!("No pull request to check: pass --title/--branch, --event or --local")
}
