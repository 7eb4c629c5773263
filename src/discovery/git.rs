// src/discovery/git.rs

use crate::core_types::Candidate;
use log::debug;
use std::path::Path;
use std::process::Command;

/// Lists tracked and untracked-but-not-ignored files via the git CLI.
///
/// Runs `git ls-files --cached --others --exclude-standard` with `root` as the
/// working directory. Returns `None` when git is unavailable, the directory is
/// not inside a repository, or the invocation fails for any other reason; the
/// caller then falls back to a plain directory walk. A `None` here is an
/// expected condition, never an error.
///
/// Paths reported by git that no longer name a regular file (e.g. deleted but
/// still in the index) are dropped.
pub(super) fn list_git_files(root: &Path) -> Option<Vec<Candidate>> {
    let output = match Command::new("git")
        .args(["ls-files", "--cached", "--others", "--exclude-standard"])
        .current_dir(root)
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            debug!("git invocation failed ({}), falling back to walk", e);
            return None;
        }
    };

    if !output.status.success() {
        debug!(
            "git ls-files exited with {} in '{}', falling back to walk",
            output.status,
            root.display()
        );
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let candidates: Vec<Candidate> = stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|rel| {
            let absolute_path = root.join(rel);
            if absolute_path.is_file() {
                Some(Candidate {
                    relative_path: rel.into(),
                    absolute_path,
                })
            } else {
                debug!("git listed '{}' but it is not a regular file, dropping", rel);
                None
            }
        })
        .collect();

    debug!("git listed {} files in '{}'", candidates.len(), root.display());
    Some(candidates)
}
