//! Produces the candidate file set for a source root.
//!
//! Two strategies: the git index first (tracked plus untracked-but-not-ignored
//! files), then a plain recursive walk with a fixed directory exclusion set
//! when git is unavailable or the root is not a repository. Both strategies
//! enumerate sets, so the result contains no duplicate paths by construction.

use crate::core_types::Candidate;
use log::debug;
use std::path::Path;

mod git;
mod walker;

/// Lists every candidate file under `root`, sorted by relative path.
///
/// The git listing is preferred because it already respects ignore rules; its
/// failure for any reason silently selects the walk fallback. The returned
/// vector is sorted lexicographically by relative path so downstream output
/// is deterministic.
///
/// # Examples
///
/// ```
/// use std::fs;
/// use tempfile::tempdir;
///
/// let temp = tempdir().unwrap();
/// fs::write(temp.path().join("b.txt"), "B").unwrap();
/// fs::write(temp.path().join("a.txt"), "A").unwrap();
///
/// let candidates = ctxcat::discovery::list_files(temp.path());
/// let names: Vec<_> = candidates
///     .iter()
///     .map(|c| c.relative_path.to_str().unwrap().to_string())
///     .collect();
/// assert_eq!(names, ["a.txt", "b.txt"]);
/// ```
pub fn list_files(root: &Path) -> Vec<Candidate> {
    let mut candidates = match git::list_git_files(root) {
        Some(candidates) => {
            debug!("Using git listing for '{}'", root.display());
            candidates
        }
        None => {
            debug!(
                "Git listing unavailable for '{}', using directory walk",
                root.display()
            );
            walker::walk_files(root)
        }
    };

    // Sort for consistent output across runs and strategies.
    candidates.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    candidates
}
