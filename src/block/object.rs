//! `Versions.kt` generation for the Kotlin object dialect
//!
//! Unlike the other dialects, the object dialect owns its whole file, so
//! there are no markers to locate: the file is rendered from scratch.

use super::REFERENCE_URL;
use crate::domain::Dependency;

/// Name of the generated Kotlin object
pub const VERSIONS_OBJECT_NAME: &str = "Versions";

/// Opening lines of every generated `Versions.kt`
const OBJECT_HEADER: &str = "/**\n * Generated by versions-only\n";

/// Whether `content` was written by `render_versions_object`
pub fn is_versions_object(content: &str) -> bool {
    content.starts_with(OBJECT_HEADER)
}

/// Renders a complete `Versions.kt` holding one constant per dependency
pub fn render_versions_object(dependencies: &[Dependency]) -> Vec<String> {
    let mut lines = vec![
        "/**".to_string(),
        " * Generated by versions-only".to_string(),
        format!(" * See {}", REFERENCE_URL),
        " */".to_string(),
        format!("object {} {{", VERSIONS_OBJECT_NAME),
    ];

    for dependency in dependencies {
        lines.push(format!(
            "    const val {}: String = \"{}\"{}",
            dependency.version_name,
            dependency.version,
            dependency.version_information()
        ));
    }

    lines.push("}".to_string());
    lines
}
