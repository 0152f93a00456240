use std::path::{Path, PathBuf};

/// Locate a configuration entry point by filename.
///
/// Tries each candidate name in `start`, then in each ancestor directory,
/// stopping after `stop` (inclusive). Candidates earlier in the slice win
/// within a directory; a match closer to `start` wins across directories.
/// When `stop` is not an ancestor of `start`, only `start` itself is
/// searched — the walk never escapes `stop`'s subtree.
pub fn find_config_file(start: &Path, stop: &Path, candidates: &[&str]) -> Option<PathBuf> {
    for dir in start.ancestors() {
        for name in candidates {
            let candidate = dir.join(name);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "Found config file");
                return Some(candidate);
            }
        }
        if dir == stop || !dir.starts_with(stop) {
            break;
        }
    }
    None
}
