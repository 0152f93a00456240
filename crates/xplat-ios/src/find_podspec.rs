use std::path::{Path, PathBuf};

/// Locate a `*.podspec` in `folder` (non-recursive).
///
/// Prefers the spec named after the folder itself, else the first in
/// lexicographic order. Returns the joined path, or `None` when the folder
/// has no spec, which is legal for dependencies without native code.
pub fn find_podspec(folder: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(folder).ok()?;
    let mut specs: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".podspec"))
        .collect();
    if specs.is_empty() {
        return None;
    }
    specs.sort();

    let package_spec = folder
        .file_name()
        .map(|name| format!("{}.podspec", name.to_string_lossy()));
    let chosen = match package_spec {
        Some(name) if specs.contains(&name) => name,
        _ => specs.into_iter().next()?,
    };
    tracing::debug!(folder = %folder.display(), spec = %chosen, "Found podspec");
    Some(folder.join(chosen))
}

#[cfg(test)]
#[path = "find_podspec_tests.rs"]
mod tests;
