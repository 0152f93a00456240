//! Configuration discovery, validation, and typed loading (xplat.config.toml).

pub mod reader;
pub mod schema;
pub mod search;
mod validate;

pub use reader::{read_dependency_config, read_project_config};
pub use schema::{
    DependencyOverride, DependencyParams, DependencyPlatforms, DependencyUserConfig,
    OverridePlatforms, PlatformOverride, ProjectPlatforms, ProjectUserConfig, SEARCH_PLACES,
};
pub use search::find_config_file;
