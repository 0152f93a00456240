use super::*;
use std::path::PathBuf;
use xplat_core::ConfigError;

fn project_violations(content: &str) -> Vec<Violation> {
    let raw: Value = content.parse().unwrap();
    match validate_raw(SchemaKind::Project, &raw, &PathBuf::from("xplat.config.toml")) {
        Ok(()) => Vec::new(),
        Err(ConfigError::Validation(report)) => report.violations,
        Err(other) => panic!("unexpected error: {other}"),
    }
}

fn dependency_violations(content: &str) -> Vec<Violation> {
    let raw: Value = content.parse().unwrap();
    match validate_raw(
        SchemaKind::Dependency,
        &raw,
        &PathBuf::from("xplat.config.toml"),
    ) {
        Ok(()) => Vec::new(),
        Err(ConfigError::Validation(report)) => report.violations,
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_valid_project_config_passes() {
    let violations = project_violations(
        r#"
        exclude_dependencies = ["lib-a"]

        [project.ios]
        project = "ios/App.xcworkspace"

        [[project.ios.script_phases]]
        name = "Codegen"
        script = "./codegen.sh"
        execution_position = "before_compile"

        [dependencies.lib-b.platforms.ios]
        podspec_path = "custom/lib-b.podspec"
        "#,
    );
    assert!(violations.is_empty(), "{violations:?}");
}

#[test]
fn test_every_violation_is_reported_not_just_the_first() {
    let violations = project_violations(
        r#"
        exclude_dependencies = true

        [project.ios]
        project = 42
        "#,
    );
    assert_eq!(violations.len(), 2);
    let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
    assert!(paths.contains(&"exclude_dependencies"));
    assert!(paths.contains(&"project.ios.project"));
}

#[test]
fn test_unknown_top_level_key() {
    let violations = project_violations("platform = \"ios\"\n");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "platform");
    assert!(violations[0].actual.contains("unknown key"));
}

#[test]
fn test_unknown_key_inside_platform_block() {
    let violations = project_violations("[project.ios]\npodfile = \"ios/Podfile\"\n");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "project.ios.podfile");
}

#[test]
fn test_ios_accepts_boolean_switch() {
    assert!(project_violations("[project]\nios = false\n").is_empty());
    assert!(project_violations("[project]\nios = true\n").is_empty());
}

#[test]
fn test_ios_rejects_other_scalars() {
    let violations = project_violations("[project]\nios = \"yes\"\n");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "project.ios");
    assert_eq!(violations[0].expected, "table or boolean");
    assert_eq!(violations[0].actual, "string");
}

#[test]
fn test_script_phase_requires_name() {
    let violations = project_violations(
        r#"
        [[project.ios.script_phases]]
        script = "./run.sh"
        "#,
    );
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "project.ios.script_phases[0].name");
    assert_eq!(violations[0].actual, "missing required key");
}

#[test]
fn test_script_phase_execution_position_is_constrained() {
    let violations = project_violations(
        r#"
        [[project.ios.script_phases]]
        name = "Codegen"
        execution_position = "during_compile"
        "#,
    );
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].path,
        "project.ios.script_phases[0].execution_position"
    );
    assert!(violations[0].expected.starts_with("one of:"));
}

#[test]
fn test_script_phases_wrong_container_type() {
    let violations = project_violations("[project.ios]\nscript_phases = \"none\"\n");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "project.ios.script_phases");
    assert_eq!(violations[0].expected, "array of script phases");
}

#[test]
fn test_exclude_dependencies_items_must_be_strings() {
    let violations = project_violations("exclude_dependencies = [\"ok\", 3]\n");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "exclude_dependencies[1]");
    assert_eq!(violations[0].actual, "integer");
}

#[test]
fn test_valid_dependency_config_passes() {
    let violations = dependency_violations(
        r#"
        [dependency]
        name = "renamed-lib"

        [dependency.platforms.ios]
        podspec_path = "ios/lib.podspec"
        "#,
    );
    assert!(violations.is_empty(), "{violations:?}");
}

#[test]
fn test_dependency_schema_rejects_project_keys() {
    let violations = dependency_violations("[project.ios]\nproject = \"x\"\n");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "project");
    assert!(violations[0].actual.contains("unknown key"));
}

#[test]
fn test_dependency_name_must_be_string() {
    let violations = dependency_violations("[dependency]\nname = 7\n");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "dependency.name");
    assert_eq!(violations[0].expected, "string");
}
