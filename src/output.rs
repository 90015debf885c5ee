//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::adapters::{ConsoleSurface, Emission};
use crate::core::models::{IssueKey, IssueKeyLocation, Outcome};
use crate::core::ports::ReviewSurface;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a `check` run
#[derive(Debug, Serialize)]
pub struct LinkReport {
    /// Field that was scanned
    pub location: IssueKeyLocation,
    /// Keys found, in order
    pub keys: Vec<IssueKey>,
    /// Whether the run ended with the missing-key warning
    pub warned: bool,
    /// Annotations posted during the run
    pub emissions: Vec<Emission>,
}

impl LinkReport {
    /// Build a report from a finished run
    #[must_use]
    pub fn new(location: IssueKeyLocation, outcome: &Outcome, emissions: Vec<Emission>) -> Self {
        Self {
            location,
            keys: outcome.keys().to_vec(),
            warned: outcome.is_warning(),
            emissions,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let console = ConsoleSurface;
        for emission in &self.emissions {
            match emission {
                Emission::Warning(text) => console.warn(text),
                Emission::Message(text) => console.message(text),
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
