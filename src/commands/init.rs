//! Write a starter settings file

use std::fs;
use std::path::Path;

use prlink::config::Settings;
use prlink::output::{OperationResult, OutputMode};
use prlink::paths::PRLINK_TOML;

const DEFAULT_KEY: &str = "PROJ";
const DEFAULT_URL: &str = "https://jira.example.com/browse";

/// Create `.prlink.toml` in the current directory
pub fn init(force: bool, keys: &[String], url: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let path = Path::new(PRLINK_TOML);

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!("Already initialized ({PRLINK_TOML} exists). Use --force to overwrite."),
        }
        .render(mode);
        return Ok(());
    }

    let settings = Settings {
        project_keys: if keys.is_empty() {
            vec![DEFAULT_KEY.to_string()]
        } else {
            keys.to_vec()
        },
        project_url: Some(url.unwrap_or(DEFAULT_URL).to_string()),
        ..Settings::default()
    };

    let content = format!(
        "# prlink settings\n\n{}\n\
         # Replace the default \"{{emoji}} {{links}}\" message:\n\
         # [message]\n\
         # template = \"{{emoji}} Related: {{links}}\"\n\
         # separator = \" | \"\n",
        settings.to_toml()?
    );
    fs::write(path, content)?;

    OperationResult {
        success: true,
        message: format!("Created {PRLINK_TOML}"),
    }
    .render(mode);
    Ok(())
}
