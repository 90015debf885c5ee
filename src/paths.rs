//! Centralized path definitions for prlink
//!
//! ## Storage Layout
//!
//! ```text
//! repo/
//! └── .prlink.toml              # Committed project settings
//!
//! ~/.prlink/
//! └── config.toml               # User-level fallback settings
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// Project-level paths (per-repository)
// =============================================================================

/// Project settings filename
pub const PRLINK_TOML: &str = ".prlink.toml";

/// Find the nearest `.prlink.toml` from `from` upwards
///
/// The search stops at the repository root (the first directory holding
/// `.git`) or at the filesystem root.
#[must_use]
pub fn find_project_config(from: &Path) -> Option<PathBuf> {
    let mut current = from.to_path_buf();

    // Normalize: if it's a file, start from parent
    if current.is_file() {
        current = current.parent().unwrap_or(from).to_path_buf();
    }

    loop {
        let candidate = current.join(PRLINK_TOML);
        if candidate.is_file() {
            return Some(candidate);
        }

        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = ".prlink";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global prlink directory.
///
/// Returns `~/.prlink/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.prlink/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Locate the settings file: nearest project file, else the global one
#[must_use]
pub fn locate_config(from: &Path) -> Option<PathBuf> {
    find_project_config(from).or_else(|| Some(global_config()).filter(|p| p.is_file()))
}
