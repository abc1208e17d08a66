//! versions-only - Gradle versions block generator library
//!
//! This library regenerates the marker-delimited block of dependency
//! versions in a Gradle build file, in one of five dialects:
//! - Kotlin DSL `val` declarations (build.gradle.kts)
//! - Kotlin `object Versions` constants (buildSrc Versions.kt)
//! - Groovy DSL `def` declarations (build.gradle)
//! - Groovy DSL `ext { }` block (build.gradle)
//! - gradle.properties entries

pub mod block;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod report;
