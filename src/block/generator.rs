//! Rendering of the managed block per dialect

use super::Markers;
use crate::domain::{Dependency, Dialect};

/// Renders the complete replacement block, start marker through end marker
///
/// # Panics
/// Panics for `Dialect::KotlinObject`, which is rendered by
/// `render_versions_object` instead.
pub fn render_block(
    dialect: Dialect,
    indent: &str,
    dependencies: &[Dependency],
    markers: &Markers,
) -> Vec<String> {
    let comment = dialect.comment();
    let mut lines: Vec<String> = markers
        .intro()
        .iter()
        .map(|line| format!("{}{} {}", indent, comment, line))
        .collect();

    if dialect == Dialect::GroovyExt {
        lines.push(format!("{}ext {{", indent));
    }
    if dialect == Dialect::GradleProperties {
        lines.push(String::new());
    }

    for dependency in dependencies {
        lines.extend(render_dependency(dependency, dialect, indent));
    }

    if dialect == Dialect::GroovyExt {
        lines.push(format!("{}}}", indent));
    }
    lines.push(format!("{}{} {}", indent, comment, markers.end));

    lines
}

/// Renders the declaration of a single dependency
///
/// Returns one line, or two for `gradle.properties` (the version
/// information comment, then `key=value`).
///
/// # Panics
/// Panics for `Dialect::KotlinObject`: reaching this point with the object
/// dialect means the caller routed it to the wrong generator.
pub fn render_dependency(dependency: &Dependency, dialect: Dialect, indent: &str) -> Vec<String> {
    let info = dependency
        .version_information()
        .replace('"', dialect.quote())
        .replace("//", dialect.comment());
    let name = &dependency.version_name;
    let version = &dependency.version;

    match dialect {
        Dialect::KotlinObject => {
            panic!("KOTLIN_OBJECT versions are generated as an object, not as a block")
        }
        Dialect::KotlinVal => {
            let quote = dialect.quote();
            vec![format!(
                "{indent}val {name} = {quote}{version}{quote}{info}"
            )]
        }
        Dialect::GroovyDef => vec![format!("{indent}def {name} = '{version}'{info}")],
        Dialect::GroovyExt => vec![format!("{indent}{indent}{name} = '{version}'{info}")],
        Dialect::GradleProperties => {
            vec![info.trim().to_string(), format!("{name}={version}")]
        }
    }
}
