//! Structural schema check over the raw TOML value.
//!
//! Runs before typed deserialization so that a malformed file reports every
//! violation at once instead of failing on the first field serde trips over.

use std::path::Path;
use toml::Value;
use xplat_core::{ConfigError, ValidationReport, Violation};

#[derive(Debug, Clone, Copy)]
pub(crate) enum SchemaKind {
    Project,
    Dependency,
}

#[derive(Debug, Clone, Copy)]
enum ParamsKind {
    Project,
    Dependency,
}

const EXECUTION_POSITIONS: &[&str] = &["before_compile", "after_compile", "any"];

pub(crate) fn validate_raw(
    kind: SchemaKind,
    raw: &Value,
    config_path: &Path,
) -> Result<(), ConfigError> {
    let mut violations = Vec::new();
    match raw.as_table() {
        Some(root) => match kind {
            SchemaKind::Project => validate_project_root(root, &mut violations),
            SchemaKind::Dependency => validate_dependency_root(root, &mut violations),
        },
        None => push(&mut violations, "<root>", "table", raw),
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(ValidationReport {
            config_path: config_path.to_path_buf(),
            violations,
        }))
    }
}

fn validate_project_root(root: &toml::value::Table, violations: &mut Vec<Violation>) {
    check_known_keys(
        root,
        "",
        &["project", "exclude_dependencies", "dependencies"],
        violations,
    );

    if let Some(project) = root.get("project") {
        match project.as_table() {
            Some(table) => {
                check_known_keys(table, "project", &["ios"], violations);
                if let Some(ios) = table.get("ios") {
                    validate_platform_value(ios, "project.ios", ParamsKind::Project, violations);
                }
            }
            None => push(violations, "project", "table", project),
        }
    }

    if let Some(exclude) = root.get("exclude_dependencies") {
        validate_string_array(exclude, "exclude_dependencies", violations);
    }

    if let Some(dependencies) = root.get("dependencies") {
        match dependencies.as_table() {
            Some(entries) => {
                for (name, entry) in entries {
                    validate_dependency_override(name, entry, violations);
                }
            }
            None => push(violations, "dependencies", "table", dependencies),
        }
    }
}

fn validate_dependency_root(root: &toml::value::Table, violations: &mut Vec<Violation>) {
    check_known_keys(root, "", &["dependency"], violations);

    if let Some(dependency) = root.get("dependency") {
        match dependency.as_table() {
            Some(table) => {
                check_known_keys(table, "dependency", &["name", "platforms"], violations);
                if let Some(name) = table.get("name") {
                    expect_string(name, "dependency.name", violations);
                }
                if let Some(platforms) = table.get("platforms") {
                    validate_platforms_table(platforms, "dependency.platforms", violations);
                }
            }
            None => push(violations, "dependency", "table", dependency),
        }
    }
}

fn validate_dependency_override(name: &str, entry: &Value, violations: &mut Vec<Violation>) {
    let path = format!("dependencies.{name}");
    match entry.as_table() {
        Some(table) => {
            check_known_keys(table, &path, &["platforms"], violations);
            if let Some(platforms) = table.get("platforms") {
                validate_platforms_table(platforms, &format!("{path}.platforms"), violations);
            }
        }
        None => push(violations, path, "table", entry),
    }
}

fn validate_platforms_table(value: &Value, path: &str, violations: &mut Vec<Violation>) {
    match value.as_table() {
        Some(table) => {
            check_known_keys(table, path, &["ios"], violations);
            if let Some(ios) = table.get("ios") {
                validate_platform_value(
                    ios,
                    &join_path(path, "ios"),
                    ParamsKind::Dependency,
                    violations,
                );
            }
        }
        None => push(violations, path, "table", value),
    }
}

fn validate_platform_value(
    value: &Value,
    path: &str,
    kind: ParamsKind,
    violations: &mut Vec<Violation>,
) {
    match value {
        // Explicit enable/disable switch.
        Value::Boolean(_) => {}
        Value::Table(table) => {
            let allowed: &[&str] = match kind {
                ParamsKind::Project => &["project", "script_phases"],
                ParamsKind::Dependency => &["project", "podspec_path", "script_phases"],
            };
            check_known_keys(table, path, allowed, violations);
            for key in ["project", "podspec_path"] {
                if allowed.contains(&key) {
                    if let Some(field) = table.get(key) {
                        expect_string(field, &join_path(path, key), violations);
                    }
                }
            }
            if let Some(phases) = table.get("script_phases") {
                validate_script_phases(phases, &join_path(path, "script_phases"), violations);
            }
        }
        other => push(violations, path, "table or boolean", other),
    }
}

fn validate_script_phases(value: &Value, path: &str, violations: &mut Vec<Violation>) {
    let Some(items) = value.as_array() else {
        push(violations, path, "array of script phases", value);
        return;
    };

    for (index, item) in items.iter().enumerate() {
        let item_path = format!("{path}[{index}]");
        let Some(table) = item.as_table() else {
            push(violations, item_path.as_str(), "table", item);
            continue;
        };
        check_known_keys(
            table,
            &item_path,
            &["name", "script", "path", "execution_position"],
            violations,
        );
        match table.get("name") {
            Some(name) => expect_string(name, &join_path(&item_path, "name"), violations),
            None => violations.push(Violation {
                path: join_path(&item_path, "name"),
                expected: "string".to_string(),
                actual: "missing required key".to_string(),
            }),
        }
        for key in ["script", "path"] {
            if let Some(field) = table.get(key) {
                expect_string(field, &join_path(&item_path, key), violations);
            }
        }
        if let Some(position) = table.get("execution_position") {
            let position_path = join_path(&item_path, "execution_position");
            match position.as_str() {
                Some(s) if EXECUTION_POSITIONS.contains(&s) => {}
                Some(s) => violations.push(Violation {
                    path: position_path,
                    expected: format!("one of: {}", EXECUTION_POSITIONS.join(", ")),
                    actual: format!("\"{s}\""),
                }),
                None => push(violations, position_path, "string", position),
            }
        }
    }
}

fn validate_string_array(value: &Value, path: &str, violations: &mut Vec<Violation>) {
    match value.as_array() {
        Some(items) => {
            for (index, item) in items.iter().enumerate() {
                if !item.is_str() {
                    push(violations, format!("{path}[{index}]"), "string", item);
                }
            }
        }
        None => push(violations, path, "array of strings", value),
    }
}

fn check_known_keys(
    table: &toml::value::Table,
    path_prefix: &str,
    allowed: &[&str],
    violations: &mut Vec<Violation>,
) {
    for key in table.keys() {
        if !allowed.contains(&key.as_str()) {
            violations.push(Violation {
                path: join_path(path_prefix, key),
                expected: format!("one of: {}", allowed.join(", ")),
                actual: format!("unknown key \"{key}\""),
            });
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn expect_string(value: &Value, path: &str, violations: &mut Vec<Violation>) {
    if !value.is_str() {
        push(violations, path, "string", value);
    }
}

fn push(
    violations: &mut Vec<Violation>,
    path: impl Into<String>,
    expected: impl Into<String>,
    value: &Value,
) {
    violations.push(Violation {
        path: path.into(),
        expected: expected.into(),
        actual: type_name(value).to_string(),
    });
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Integer(_) => "integer",
        Value::Float(_) => "float",
        Value::Boolean(_) => "boolean",
        Value::Datetime(_) => "datetime",
        Value::Array(_) => "array",
        Value::Table(_) => "table",
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
