//! Core domain models for versions-only
//!
//! This module contains the fundamental types used throughout the application:
//! - Output dialects and their per-variant syntax
//! - Dependency records and their version information

mod dependency;
mod dialect;

pub use dependency::{escape_identifier, is_newer, AvailableVersions, Dependency};
pub use dialect::Dialect;
