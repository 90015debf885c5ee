//! Core domain logic for prlink
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`LinkConfig`, `IssueKey`, `PullRequest`, `Outcome`)
//! - `services/` - Matching, link formatting and the message policy
//! - `ports/` - Trait definitions for the PR host and the review surface

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::LinkError;
