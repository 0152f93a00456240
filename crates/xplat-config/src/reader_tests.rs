use super::*;
use tempfile::tempdir;
use xplat_core::IosProjectParams;

fn write_config(dir: &Path, content: &str) {
    std::fs::write(dir.join("xplat.config.toml"), content).unwrap();
}

#[test]
fn test_missing_config_yields_schema_defaults() {
    let dir = tempdir().unwrap();
    let config = read_project_config(dir.path()).unwrap();
    assert_eq!(config.project.ios, Some(IosProjectParams::default()));
    assert!(config.exclude_dependencies.is_empty());
}

#[test]
fn test_valid_config_is_loaded_typed() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"
        exclude_dependencies = ["lib-a"]

        [project.ios]
        project = "ios/App.xcworkspace"
        "#,
    );

    let config = read_project_config(dir.path()).unwrap();
    assert!(config.is_excluded("lib-a"));
    assert_eq!(
        config.project.ios.unwrap().project.as_deref(),
        Some("ios/App.xcworkspace")
    );
}

#[test]
fn test_hidden_fallback_filename_is_honored() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(".xplatrc.toml"), "[project]\nios = false\n").unwrap();

    let config = read_project_config(dir.path()).unwrap();
    assert_eq!(config.project.ios, None);
}

#[test]
fn test_malformed_config_fails_with_full_report() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"
        exclude_dependencies = true

        [project.ios]
        project = 42
        "#,
    );

    let err = read_project_config(dir.path()).unwrap_err();
    let ConfigError::Validation(report) = err else {
        panic!("expected validation error, got {err}");
    };
    assert_eq!(report.violations.len(), 2);
    assert_eq!(report.config_path, dir.path().join("xplat.config.toml"));
}

#[test]
fn test_unparseable_toml_is_a_parse_error() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "[project\n");

    let err = read_project_config(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_validation_never_returns_partial_data() {
    let dir = tempdir().unwrap();
    // One good field, one bad field: the good field must not leak out.
    write_config(
        dir.path(),
        r#"
        exclude_dependencies = ["lib-a"]

        [project]
        ios = "broken"
        "#,
    );

    assert!(read_project_config(dir.path()).is_err());
}

#[test]
fn test_dependency_config_defaults_when_absent() {
    let dir = tempdir().unwrap();
    let config = read_dependency_config(dir.path()).unwrap();
    assert_eq!(config.dependency.name, None);
    assert!(config.dependency.platforms.ios.is_some());
}

#[test]
fn test_dependency_config_loaded_typed() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"
        [dependency]
        name = "renamed-lib"

        [dependency.platforms.ios]
        podspec_path = "ios/lib.podspec"
        "#,
    );

    let config = read_dependency_config(dir.path()).unwrap();
    assert_eq!(config.dependency.name.as_deref(), Some("renamed-lib"));
    assert_eq!(
        config
            .dependency
            .platforms
            .ios
            .unwrap()
            .podspec_path
            .as_deref(),
        Some("ios/lib.podspec")
    );
}

#[test]
fn test_dependency_config_rejects_project_shape() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "[project.ios]\nproject = \"x\"\n");

    let err = read_dependency_config(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}
