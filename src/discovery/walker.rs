// src/discovery/walker.rs

use crate::core_types::Candidate;
use log::{debug, warn};
use std::path::Path;
use walkdir::WalkDir;

/// Directory names pruned during the fallback walk. Conventional VCS
/// metadata, build output, and dependency directories.
const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "target",
    "build",
    "bin",
    "obj",
    "node_modules",
    ".idea",
    ".vscode",
];

fn is_excluded_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| EXCLUDED_DIRS.contains(&name))
            .unwrap_or(false)
}

/// Recursively walks `root`, yielding every regular file outside the excluded
/// directories as a `Candidate`.
///
/// This is the fallback listing used when the git strategy declines. Unlike
/// the git listing it includes every file regardless of tracked status.
/// Unreadable entries are logged and skipped, never fatal.
pub(super) fn walk_files(root: &Path) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    // Depth 0 is the root itself; only prune below it, so a source directory
    // that happens to be named e.g. "build" is still walkable.
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded_dir(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry during walk: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let absolute_path = entry.path().to_path_buf();
        let relative_path = match absolute_path.strip_prefix(root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => {
                // walkdir only yields paths under root; this is unreachable in
                // practice but harmless to skip.
                warn!(
                    "Walked path '{}' is not under the source root, skipping",
                    absolute_path.display()
                );
                continue;
            }
        };
        candidates.push(Candidate {
            relative_path,
            absolute_path,
        });
    }

    debug!("walk listed {} files in '{}'", candidates.len(), root.display());
    candidates
}
