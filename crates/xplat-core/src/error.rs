use std::fmt;
use std::path::PathBuf;

/// A single schema violation: where it happened, what the schema wanted,
/// and what the file actually contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted key path, e.g. `project.ios.script_phases[0].name`.
    pub path: String,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.path, self.expected, self.actual
        )
    }
}

/// Every schema violation found in a config file, not just the first.
///
/// Independent of the validation engine: the structural checker and any
/// serde fallback both adapt into this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub config_path: PathBuf,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Invalid configuration in {}:",
            self.config_path.display()
        )?;
        for violation in &self.violations {
            writeln!(f, "  - {violation}")?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Validation(ValidationReport),

    #[error(
        "No Podfile found in {}. An iOS project requires CocoaPods for \
         managing native dependencies; add a Podfile next to the project \
         file, or point project.ios.project at a CocoaPods-based project.",
        source_dir.display()
    )]
    PodfileMissing { source_dir: PathBuf },
}
