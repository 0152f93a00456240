//! iOS platform resolution: project and podspec discovery plus the resolvers
//! that turn user parameter blocks into ready-to-consume descriptors.

pub mod cache;
pub mod config;
pub mod find_podspec;
pub mod find_project;

pub use cache::ProjectCache;
pub use config::{dependency_config, project_config};
pub use find_podspec::find_podspec;
pub use find_project::find_project;
