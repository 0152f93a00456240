use std::path::{Path, PathBuf};

/// Directories never worth descending into: dependency installs, build
/// output, version control.
const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "Pods",
    "Carthage",
    "vendor",
    "build",
    "DerivedData",
    ".git",
];

// Workspace sorts before plain project; the derived Ord is the preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum ContainerKind {
    Workspace,
    Project,
}

#[derive(Debug)]
struct Candidate {
    rel: PathBuf,
    kind: ContainerKind,
    index: usize,
}

/// Locate a native project container under `folder`.
///
/// Recursively scans the tree (lexicographic order, so results are
/// deterministic) for `*.xcworkspace` / `*.xcodeproj` bundles. Returns the
/// path relative to `folder`, or `None` when the tree holds no Xcode project,
/// which is a legitimate state for JS-only packages.
///
/// Tie-break among multiple candidates: a workspace beats a plain project;
/// among equals, a candidate named after the search folder wins; otherwise
/// the first in traversal order.
pub fn find_project(folder: &Path) -> Option<PathBuf> {
    let mut candidates = Vec::new();
    collect(folder, folder, &mut candidates);
    tracing::debug!(
        folder = %folder.display(),
        count = candidates.len(),
        "Scanned folder for native project containers"
    );
    select(folder, candidates)
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<Candidate>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    let mut entries: Vec<_> = entries.flatten().collect();
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        // Xcode containers are directory bundles.
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if let Some(kind) = container_kind(&name) {
            let rel = path
                .strip_prefix(root)
                .unwrap_or(path.as_path())
                .to_path_buf();
            let index = out.len();
            out.push(Candidate { rel, kind, index });
            // Never descend into a matched bundle.
            continue;
        }
        if EXCLUDED_DIRS.contains(&name.as_ref()) {
            continue;
        }
        collect(root, &path, out);
    }
}

fn container_kind(name: &str) -> Option<ContainerKind> {
    if name.ends_with(".xcworkspace") {
        Some(ContainerKind::Workspace)
    } else if name.ends_with(".xcodeproj") {
        Some(ContainerKind::Project)
    } else {
        None
    }
}

fn select(folder: &Path, candidates: Vec<Candidate>) -> Option<PathBuf> {
    let folder_name = folder
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    candidates
        .into_iter()
        .min_by_key(|candidate| {
            let name_matches = matches!(
                (&folder_name, candidate.rel.file_stem()),
                (Some(folder_name), Some(stem)) if stem.to_string_lossy() == folder_name.as_str()
            );
            (candidate.kind, !name_matches, candidate.index)
        })
        .map(|candidate| candidate.rel)
}

#[cfg(test)]
#[path = "find_project_tests.rs"]
mod tests;
