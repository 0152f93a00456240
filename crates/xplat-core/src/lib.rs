//! Shared types and error taxonomy for the configuration resolution engine.

pub mod error;
pub mod types;

pub use error::{ConfigError, ValidationReport, Violation};
pub use types::{
    ExecutionPosition, IosDependencyConfig, IosDependencyParams, IosProjectConfig,
    IosProjectParams, OutputFormat, ScriptPhase,
};
