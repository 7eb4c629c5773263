// src/filtering/lockfile.rs

use std::path::Path;

// Dependency-manager lock files excluded by suffix. These are machine
// generated and far too verbose to be useful context.
const LOCKFILE_SUFFIXES: &[&str] = &["Cargo.lock", "package-lock.json", "yarn.lock"];

/// Checks if a relative path ends with a known lock-file suffix.
///
/// The match is a plain suffix check on the path string, so it catches the
/// file anywhere in the tree.
pub fn is_lockfile(relative_path: &Path) -> bool {
    relative_path
        .to_str()
        .map(|path_str| {
            LOCKFILE_SUFFIXES
                .iter()
                .any(|&suffix| path_str.ends_with(suffix))
        })
        .unwrap_or(false)
}
