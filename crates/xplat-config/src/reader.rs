use std::path::{Path, PathBuf};
use toml::Value;
use xplat_core::{ConfigError, ValidationReport, Violation};

use crate::schema::{DependencyUserConfig, ProjectUserConfig, SEARCH_PLACES};
use crate::search::find_config_file;
use crate::validate::{SchemaKind, validate_raw};

/// Read the host application's configuration from `root`.
///
/// A missing file is not an error: the caller gets schema defaults and
/// discovery does the rest. A present-but-malformed file is a hard failure
/// carrying every schema violation.
pub fn read_project_config(root: &Path) -> Result<ProjectUserConfig, ConfigError> {
    let Some((path, content, raw)) = load_raw(root)? else {
        tracing::debug!(root = %root.display(), "No project config file, using defaults");
        return Ok(ProjectUserConfig::default());
    };
    validate_raw(SchemaKind::Project, &raw, &path)?;
    toml::from_str(&content).map_err(|source| serde_fallback(&path, source))
}

/// Read a native package's self-declared configuration from its install
/// location. Same absence/validation semantics as the project reader.
pub fn read_dependency_config(root: &Path) -> Result<DependencyUserConfig, ConfigError> {
    let Some((path, content, raw)) = load_raw(root)? else {
        tracing::debug!(root = %root.display(), "No dependency config file, using defaults");
        return Ok(DependencyUserConfig::default());
    };
    validate_raw(SchemaKind::Dependency, &raw, &path)?;
    toml::from_str(&content).map_err(|source| serde_fallback(&path, source))
}

fn load_raw(root: &Path) -> Result<Option<(PathBuf, String, Value)>, ConfigError> {
    let Some(path) = find_config_file(root, root, SEARCH_PLACES) else {
        return Ok(None);
    };
    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let raw = content
        .parse::<Value>()
        .map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
    Ok(Some((path, content, raw)))
}

/// Adapter for serde errors that slip past the structural pass; reported in
/// the same enumerable shape as structural violations.
fn serde_fallback(path: &Path, source: toml::de::Error) -> ConfigError {
    ConfigError::Validation(ValidationReport {
        config_path: path.to_path_buf(),
        violations: vec![Violation {
            path: "<config>".to_string(),
            expected: "schema-conformant value".to_string(),
            actual: source.to_string(),
        }],
    })
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
