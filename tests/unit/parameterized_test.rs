//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use prlink::core::models::{IssueKeyLocation, LinkStyle};
use prlink::core::services::KeyMatcher;
use test_case::test_case;

// =============================================================================
// Matcher Tests
// =============================================================================

fn find(keys: &[&str], text: &str) -> Vec<String> {
    KeyMatcher::new(keys).unwrap().find_keys(text).iter().map(ToString::to_string).collect()
}

#[test_case("PROJ-42: fix bug", &["PROJ-42"] ; "key at start of title")]
#[test_case("Fix bug (PROJ-42)", &["PROJ-42"] ; "key in parentheses")]
#[test_case("feature/PROJ-42-fix-bug", &["PROJ-42"] ; "key in branch name")]
#[test_case("proj-1", &["proj-1"] ; "lowercase key keeps case")]
#[test_case("PROJ-1 PROJ-1", &["PROJ-1", "PROJ-1"] ; "repeats kept")]
#[test_case("PROJ-12345678901234567890", &["PROJ-12345678901234567890"] ; "long number")]
#[test_case("PROJ-", &[] ; "hyphen without digits")]
#[test_case("PROJ 42", &[] ; "space instead of hyphen")]
#[test_case("no ticket here", &[] ; "no key")]
#[test_case("", &[] ; "empty text")]
fn test_single_project(text: &str, expected: &[&str]) {
    assert_eq!(find(&["PROJ"], text), expected);
}

#[test_case(&["PROJ", "OPS"], "OPS-1 PROJ-2", &["OPS-1", "PROJ-2"] ; "two projects in text order")]
#[test_case(&["AB", "ABC"], "ABC-1", &["ABC-1"] ; "shorter prefix does not swallow longer")]
#[test_case(&["ops"], "OPS-9", &["OPS-9"] ; "lowercase configured key")]
#[test_case(&["C++"], "C++-3", &["C++-3"] ; "regex metacharacters are literal")]
fn test_multi_project(keys: &[&str], text: &str, expected: &[&str]) {
    assert_eq!(find(keys, text), expected);
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test_case("title", IssueKeyLocation::Title ; "title")]
#[test_case("branch", IssueKeyLocation::Branch ; "branch")]
#[test_case("BRANCH", IssueKeyLocation::Branch ; "uppercase")]
fn test_location_parsing(input: &str, expected: IssueKeyLocation) {
    assert_eq!(input.parse::<IssueKeyLocation>().unwrap(), expected);
}

#[test_case(LinkStyle::Html, "html" ; "html")]
#[test_case(LinkStyle::Markdown, "markdown" ; "markdown")]
fn test_link_style_display(style: LinkStyle, expected: &str) {
    assert_eq!(style.to_string(), expected);
}
