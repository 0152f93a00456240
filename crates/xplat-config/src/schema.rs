use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use xplat_core::{IosDependencyParams, IosProjectParams};

/// Candidate filenames for the configuration entry point, in search order.
pub const SEARCH_PLACES: &[&str] = &["xplat.config.toml", ".xplatrc.toml"];

/// The host application's own configuration, schema-checked and defaulted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectUserConfig {
    #[serde(default)]
    pub project: ProjectPlatforms,
    /// Dependencies the project never integrates, by name.
    #[serde(default)]
    pub exclude_dependencies: Vec<String>,
    /// Host-side overrides for individual dependencies, by name.
    #[serde(default)]
    pub dependencies: HashMap<String, DependencyOverride>,
}

impl ProjectUserConfig {
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude_dependencies.iter().any(|n| n == name)
    }

    /// Effective iOS parameters for a dependency: the host's per-dependency
    /// override (when declared) wins over the package's self-declared block.
    pub fn ios_dependency_params(
        &self,
        name: &str,
        own: Option<IosDependencyParams>,
    ) -> Option<IosDependencyParams> {
        match self.dependencies.get(name) {
            Some(entry) => entry.platforms.ios.apply(own),
            None => own,
        }
    }
}

/// Per-platform parameter blocks of the host application.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectPlatforms {
    /// `None` means the user set `ios = false`: the platform is disabled and
    /// no discovery runs. An absent key defaults to an empty block, which
    /// resolves entirely through fallback discovery.
    #[serde(default = "default_ios_project", deserialize_with = "platform_toggle")]
    pub ios: Option<IosProjectParams>,
}

impl Default for ProjectPlatforms {
    fn default() -> Self {
        Self {
            ios: default_ios_project(),
        }
    }
}

fn default_ios_project() -> Option<IosProjectParams> {
    Some(IosProjectParams::default())
}

/// A native package's self-declared configuration, found under its own
/// install location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DependencyUserConfig {
    #[serde(default)]
    pub dependency: DependencyParams,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DependencyParams {
    /// Declared name override; defaults to the package folder's name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub platforms: DependencyPlatforms,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DependencyPlatforms {
    #[serde(
        default = "default_ios_dependency",
        deserialize_with = "platform_toggle"
    )]
    pub ios: Option<IosDependencyParams>,
}

impl Default for DependencyPlatforms {
    fn default() -> Self {
        Self {
            ios: default_ios_dependency(),
        }
    }
}

fn default_ios_dependency() -> Option<IosDependencyParams> {
    Some(IosDependencyParams::default())
}

/// Host-side override block for one dependency (`[dependencies.<name>]`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DependencyOverride {
    #[serde(default)]
    pub platforms: OverridePlatforms,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OverridePlatforms {
    #[serde(default)]
    pub ios: PlatformOverride<IosDependencyParams>,
}

/// Host-side override for one platform of one dependency.
///
/// Distinct from `Option` on purpose: "the host says nothing" and "the host
/// disables the platform" are different states and must not be conflated.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformOverride<T> {
    /// No override declared; the dependency's own config applies.
    Unset,
    /// `ios = false`: the host force-disables this platform.
    Disabled,
    Params(T),
}

impl<T> Default for PlatformOverride<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T: Clone> PlatformOverride<T> {
    pub fn apply(&self, own: Option<T>) -> Option<T> {
        match self {
            Self::Unset => own,
            Self::Disabled => None,
            Self::Params(params) => Some(params.clone()),
        }
    }
}

impl<'de, T> Deserialize<'de> for PlatformOverride<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match PlatformField::<T>::deserialize(deserializer)? {
            PlatformField::Params(params) => Self::Params(params),
            PlatformField::Switch(true) => Self::Params(T::default()),
            PlatformField::Switch(false) => Self::Disabled,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PlatformField<T> {
    Params(T),
    Switch(bool),
}

/// `ios = false` disables the platform, a table configures it, and `true`
/// is accepted as "defaults". Absent keys are handled by the field default.
fn platform_toggle<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match PlatformField::<T>::deserialize(deserializer)? {
        PlatformField::Params(params) => Some(params),
        PlatformField::Switch(true) => Some(T::default()),
        PlatformField::Switch(false) => None,
    })
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
