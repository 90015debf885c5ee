//! Tests for settings files and their discovery

use std::fs;

use prlink::config::Settings;
use prlink::core::models::{IssueKeyLocation, LinkStyle, PullRequest};
use prlink::core::services::evaluate;
use prlink::paths::{PRLINK_TOML, find_project_config};
use tempfile::TempDir;

use crate::common::write_settings;

// =============================================================================
// DISCOVERY
// =============================================================================

#[test]
fn finds_settings_in_start_directory() {
    let temp = TempDir::new().unwrap();
    write_settings(temp.path(), "project_keys = [\"PROJ\"]\n");

    assert_eq!(find_project_config(temp.path()), Some(temp.path().join(PRLINK_TOML)));
}

#[test]
fn finds_settings_in_parent_directory() {
    let temp = TempDir::new().unwrap();
    write_settings(temp.path(), "project_keys = [\"PROJ\"]\n");
    let nested = temp.path().join("src/deep");
    fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_project_config(&nested), Some(temp.path().join(PRLINK_TOML)));
}

#[test]
fn search_stops_at_repository_root() {
    let temp = TempDir::new().unwrap();
    write_settings(temp.path(), "project_keys = [\"OUTER\"]\n");
    let repo = temp.path().join("repo");
    fs::create_dir_all(repo.join(".git")).unwrap();
    let nested = repo.join("src");
    fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_project_config(&nested), None);
}

#[test]
fn nearest_settings_wins() {
    let temp = TempDir::new().unwrap();
    write_settings(temp.path(), "project_keys = [\"OUTER\"]\n");
    let inner = temp.path().join("inner");
    fs::create_dir_all(&inner).unwrap();
    write_settings(&inner, "project_keys = [\"INNER\"]\n");

    assert_eq!(find_project_config(&inner), Some(inner.join(PRLINK_TOML)));
}

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn load_full_settings() {
    let temp = TempDir::new().unwrap();
    write_settings(
        temp.path(),
        r#"
project_keys = ["PROJ", "OPS"]
project_url = "https://jira.example.com/browse"
location = "branch"
emoji = ":ticket:"
link_style = "markdown"

[message]
template = "{emoji} Related: {links}"
separator = " | "
"#,
    );

    let settings = Settings::load(&temp.path().join(PRLINK_TOML)).unwrap();
    assert_eq!(settings.project_keys, vec!["PROJ", "OPS"]);
    assert_eq!(settings.location, IssueKeyLocation::Branch);
    assert_eq!(settings.emoji, ":ticket:");
    assert_eq!(settings.link_style, LinkStyle::Markdown);
    assert_eq!(settings.message.as_ref().unwrap().separator, " | ");
}

#[test]
fn load_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    let err = Settings::load(&temp.path().join(PRLINK_TOML)).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn load_invalid_location_fails() {
    let temp = TempDir::new().unwrap();
    write_settings(temp.path(), "project_keys = [\"PROJ\"]\nlocation = \"body\"\n");

    assert!(Settings::load(&temp.path().join(PRLINK_TOML)).is_err());
}

#[test]
fn toml_round_trip_keeps_settings() {
    let settings = Settings {
        project_keys: vec!["PROJ".to_string()],
        project_url: Some("https://jira.example.com/browse".to_string()),
        ..Settings::default()
    };

    let parsed = Settings::parse(&settings.to_toml().unwrap()).unwrap();
    assert_eq!(parsed, settings);
}

// =============================================================================
// LINK CONFIG
// =============================================================================

#[test]
fn template_becomes_formatter() {
    let settings = Settings::parse(
        r#"
project_keys = ["PROJ"]
project_url = "https://jira.example.com/browse"
link_style = "markdown"

[message]
template = "{emoji} Related: {links}"
separator = " | "
"#,
    )
    .unwrap();

    let config = settings.to_link_config().unwrap();
    let outcome = evaluate(&config, &PullRequest::new("PROJ-1 PROJ-2", "main")).unwrap();

    assert_eq!(
        outcome.text(),
        ":link: Related: [PROJ-1](https://jira.example.com/browse/PROJ-1) | \
         [PROJ-2](https://jira.example.com/browse/PROJ-2)"
    );
}

#[test]
fn keys_are_trimmed() {
    let settings = Settings::parse(
        "project_keys = [\" PROJ \"]\nproject_url = \"https://jira.example.com/browse\"\n",
    )
    .unwrap();

    let config = settings.to_link_config().unwrap();
    assert_eq!(config.project_keys().to_vec(), vec!["PROJ"]);
}
