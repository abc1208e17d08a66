//! Output dialects for the generated version declarations

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Syntax used to declare dependency versions in a build file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// Kotlin DSL: `val okhttp = "4.9.0"`
    KotlinVal,
    /// Kotlin `object Versions { const val ... }` in buildSrc
    KotlinObject,
    /// Groovy DSL: `def okhttp = '4.9.0'`
    GroovyDef,
    /// Groovy DSL inside an `ext { }` block
    GroovyExt,
    /// `gradle.properties`: `okhttp=4.9.0`
    GradleProperties,
}

impl Dialect {
    /// Quote placed around version strings
    pub fn quote(&self) -> &'static str {
        match self {
            Dialect::KotlinVal | Dialect::KotlinObject => "\"",
            Dialect::GroovyDef | Dialect::GroovyExt => "'",
            Dialect::GradleProperties => "",
        }
    }

    /// File the declarations usually live in
    pub fn suggested_filename(&self) -> &'static str {
        match self {
            Dialect::KotlinVal => "build.gradle.kts",
            Dialect::KotlinObject => "Versions.kt",
            Dialect::GroovyDef | Dialect::GroovyExt => "build.gradle",
            Dialect::GradleProperties => "gradle.properties",
        }
    }

    /// Line comment marker
    pub fn comment(&self) -> &'static str {
        match self {
            Dialect::GradleProperties => "#",
            _ => "//",
        }
    }

    /// Name accepted on the command line and in `versions-only.toml`
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::KotlinVal => "kotlin-val",
            Dialect::KotlinObject => "kotlin-object",
            Dialect::GroovyDef => "groovy-def",
            Dialect::GroovyExt => "groovy-ext",
            Dialect::GradleProperties => "gradle-properties",
        }
    }

    /// Returns all dialects
    pub fn all() -> &'static [Dialect] {
        &[
            Dialect::KotlinVal,
            Dialect::KotlinObject,
            Dialect::GroovyDef,
            Dialect::GroovyExt,
            Dialect::GradleProperties,
        ]
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::KotlinVal => "KOTLIN_VAL",
            Dialect::KotlinObject => "KOTLIN_OBJECT",
            Dialect::GroovyDef => "GROOVY_DEF",
            Dialect::GroovyExt => "GROOVY_EXT",
            Dialect::GradleProperties => "GRADLE_PROPERTIES",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Dialect::all()
            .iter()
            .copied()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| {
                let expected: Vec<&str> = Dialect::all().iter().map(|d| d.as_str()).collect();
                format!(
                    "unknown dialect '{}': expected one of {}",
                    s,
                    expected.join(", ")
                )
            })
    }
}
