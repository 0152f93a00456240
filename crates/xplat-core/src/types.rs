use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// When a script phase runs relative to the native compile step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionPosition {
    BeforeCompile,
    AfterCompile,
    Any,
}

/// A build script hook injected into the native project.
///
/// Either `script` (inline shell) or `path` (script file relative to the
/// package root) provides the body; `name` is what shows up in the build log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptPhase {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_position: Option<ExecutionPosition>,
}

/// User-declared overrides for the host application's iOS project.
///
/// All fields are optional; absence triggers fallback discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IosProjectParams {
    /// Explicit project path relative to the package root
    /// (e.g. `ios/MyApp.xcworkspace`). Skips project discovery when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_phases: Option<Vec<ScriptPhase>>,
}

/// User-declared overrides for a native dependency's iOS integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IosDependencyParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Explicit podspec path relative to the package root. Skips podspec
    /// discovery when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub podspec_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_phases: Option<Vec<ScriptPhase>>,
}

/// Fully-resolved iOS descriptor for the host application.
///
/// `source_dir` is always the directory containing the resolved project;
/// `script_phases` is always present (empty when the user declared none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IosProjectConfig {
    pub source_dir: PathBuf,
    pub podfile: PathBuf,
    pub script_phases: Vec<ScriptPhase>,
}

/// Fully-resolved iOS descriptor for a native dependency.
///
/// Unlike the project descriptor there is no Podfile requirement, and the
/// podspec may legitimately be absent (a dependency with no native spec).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IosDependencyConfig {
    pub source_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podspec_path: Option<PathBuf>,
    pub script_phases: Vec<ScriptPhase>,
}

/// Output format for CLI responses
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
