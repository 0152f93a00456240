use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use xplat_config::{DependencyUserConfig, read_dependency_config, read_project_config};
use xplat_core::{IosDependencyConfig, IosProjectConfig, OutputFormat};
use xplat_ios::ProjectCache;

pub(crate) fn handle_config(root: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let root = resolve_root(root)?;
    tracing::debug!(root = %root.display(), "Resolving project configuration");
    let config = read_project_config(&root)?;

    let mut cache = ProjectCache::new();
    match xplat_ios::project_config(&root, config.project.ios.as_ref(), &mut cache)? {
        Some(ios) => print_project(&ios, &format)?,
        None => eprintln!("iOS does not apply to this project (no native project found)."),
    }
    Ok(())
}

pub(crate) fn handle_dependency(
    path: PathBuf,
    root: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let root = resolve_root(root)?;
    let host = read_project_config(&root)?;
    let dep = read_dependency_config(&path)?;

    let name = dependency_name(&dep, &path);
    if host.is_excluded(&name) {
        tracing::debug!(name = %name, "Skipping excluded dependency");
        eprintln!("Dependency '{name}' is excluded by the project configuration.");
        return Ok(());
    }

    let params = host.ios_dependency_params(&name, dep.dependency.platforms.ios.clone());
    let mut cache = ProjectCache::new();
    match xplat_ios::dependency_config(&path, params.as_ref(), &mut cache) {
        Some(ios) => print_dependency(&name, &ios, &format)?,
        None => eprintln!("Dependency '{name}' has no iOS project."),
    }
    Ok(())
}

pub(crate) fn handle_validate(root: Option<PathBuf>) -> Result<()> {
    let root = resolve_root(root)?;
    // Validation errors surface with the full violation list via Display.
    read_project_config(&root)?;
    eprintln!("Configuration OK: {}", root.display());
    Ok(())
}

/// Declared name override wins; the package folder's name is the fallback.
fn dependency_name(dep: &DependencyUserConfig, path: &Path) -> String {
    dep.dependency.name.clone().unwrap_or_else(|| {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    })
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(path) => Ok(path),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}

fn print_project(ios: &IosProjectConfig, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(ios)?),
        OutputFormat::Text => {
            println!("source dir:    {}", ios.source_dir.display());
            println!("podfile:       {}", ios.podfile.display());
            println!("script phases: {}", ios.script_phases.len());
        }
    }
    Ok(())
}

fn print_dependency(name: &str, ios: &IosDependencyConfig, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(ios)?),
        OutputFormat::Text => {
            println!("dependency:    {name}");
            println!("source dir:    {}", ios.source_dir.display());
            match &ios.podspec_path {
                Some(podspec) => println!("podspec:       {}", podspec.display()),
                None => println!("podspec:       (none)"),
            }
            println!("script phases: {}", ios.script_phases.len());
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_cmds_tests.rs"]
mod tests;
