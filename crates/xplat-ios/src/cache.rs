use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::find_project::find_project;

/// Memoizes project discovery per search folder.
///
/// Owned by the caller for one resolution session; entries are never
/// invalidated, which is safe while the project layout stays static.
/// Long-running tools should create a fresh cache per unit of work.
#[derive(Debug, Default)]
pub struct ProjectCache {
    entries: HashMap<PathBuf, Option<PathBuf>>,
    scans: usize,
}

impl ProjectCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovered project path for `folder`, scanning the file system at
    /// most once per distinct folder for the lifetime of this cache.
    /// "No project found" is cached like any other answer.
    pub fn find_project(&mut self, folder: &Path) -> Option<PathBuf> {
        if let Some(cached) = self.entries.get(folder) {
            tracing::debug!(folder = %folder.display(), "Project discovery cache hit");
            return cached.clone();
        }
        self.scans += 1;
        let found = find_project(folder);
        self.entries.insert(folder.to_path_buf(), found.clone());
        found
    }

    /// Number of file-system scans performed so far.
    pub fn scan_count(&self) -> usize {
        self.scans
    }
}
