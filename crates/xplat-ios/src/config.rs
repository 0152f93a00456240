use std::path::{Path, PathBuf};

use xplat_core::{
    ConfigError, IosDependencyConfig, IosDependencyParams, IosProjectConfig, IosProjectParams,
};

use crate::cache::ProjectCache;
use crate::find_podspec::find_podspec;

/// Resolve the host application's iOS descriptor.
///
/// `None` params means the platform is disabled or absent from the user
/// config: the resolver returns `Ok(None)` without touching the file system.
/// An explicit `params.project` is used verbatim; otherwise discovery runs
/// through the cache. No determinable project also yields `Ok(None)` — the
/// platform simply does not apply.
///
/// The one hard failure: a project was found but its `Podfile` is missing.
/// That is a broken setup, not an unused feature.
pub fn project_config(
    folder: &Path,
    params: Option<&IosProjectParams>,
    cache: &mut ProjectCache,
) -> Result<Option<IosProjectConfig>, ConfigError> {
    let Some(params) = params else {
        return Ok(None);
    };

    let Some(project) = resolve_project_path(folder, params.project.as_deref(), cache) else {
        return Ok(None);
    };

    let project_path = folder.join(&project);
    let source_dir = project_path.parent().unwrap_or(folder).to_path_buf();
    let podfile = source_dir.join("Podfile");

    if !podfile.exists() {
        return Err(ConfigError::PodfileMissing { source_dir });
    }

    Ok(Some(IosProjectConfig {
        source_dir,
        podfile,
        script_phases: params.script_phases.clone().unwrap_or_default(),
    }))
}

/// Resolve a native dependency's iOS descriptor.
///
/// Same shape as project resolution minus the Podfile requirement —
/// dependencies are not obliged to use the host's build system. The podspec
/// resolves by precedence: explicit `params.podspec_path`, then the package
/// root, then the project source dir; absence is legal.
pub fn dependency_config(
    folder: &Path,
    params: Option<&IosDependencyParams>,
    cache: &mut ProjectCache,
) -> Option<IosDependencyConfig> {
    let params = params?;

    let project = resolve_project_path(folder, params.project.as_deref(), cache)?;
    let project_path = folder.join(&project);
    let source_dir = project_path.parent().unwrap_or(folder).to_path_buf();

    // Podspecs usually sit in the package root or next to the project.
    let podspec_path = params
        .podspec_path
        .as_ref()
        .map(|path| folder.join(path))
        .or_else(|| find_podspec(folder))
        .or_else(|| find_podspec(&source_dir));

    Some(IosDependencyConfig {
        source_dir,
        podspec_path,
        script_phases: params.script_phases.clone().unwrap_or_default(),
    })
}

fn resolve_project_path(
    folder: &Path,
    explicit: Option<&str>,
    cache: &mut ProjectCache,
) -> Option<PathBuf> {
    match explicit {
        Some(project) => Some(PathBuf::from(project)),
        None => cache.find_project(folder),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
