//! Review surface implementations

use std::cell::RefCell;

use colored::Colorize;
use serde::Serialize;

use crate::core::ports::ReviewSurface;

/// Prints warnings to stderr and messages to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSurface;

impl ReviewSurface for ConsoleSurface {
    fn warn(&self, text: &str) {
        eprintln!("{} {text}", "warning:".yellow().bold());
    }

    fn message(&self, text: &str) {
        println!("{text}");
    }
}

/// One annotation posted to a surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Emission {
    /// Posted through [`ReviewSurface::warn`]
    Warning(String),
    /// Posted through [`ReviewSurface::message`]
    Message(String),
}

/// Keeps every emission in memory, in order
#[derive(Debug, Default)]
pub struct RecordingSurface {
    emissions: RefCell<Vec<Emission>>,
}

impl RecordingSurface {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything posted so far
    #[must_use]
    pub fn emissions(&self) -> Vec<Emission> {
        self.emissions.borrow().clone()
    }

    /// Texts posted as warnings
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.emissions
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Emission::Warning(text) => Some(text.clone()),
                Emission::Message(_) => None,
            })
            .collect()
    }

    /// Texts posted as messages
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.emissions
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Emission::Message(text) => Some(text.clone()),
                Emission::Warning(_) => None,
            })
            .collect()
    }
}

impl ReviewSurface for RecordingSurface {
    fn warn(&self, text: &str) {
        self.emissions.borrow_mut().push(Emission::Warning(text.to_string()));
    }

    fn message(&self, text: &str) {
        self.emissions.borrow_mut().push(Emission::Message(text.to_string()));
    }
}
