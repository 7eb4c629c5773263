//! Defines core data structures used throughout the application pipeline.

use std::path::PathBuf;

/// A file discovered under the source root and considered for inclusion.
///
/// Candidates are produced by the discovery stage and sorted lexicographically
/// by relative path before the writer runs, so the output is deterministic
/// regardless of listing order.
///
/// # Examples
///
/// ```
/// use ctxcat::core_types::Candidate;
/// use std::path::PathBuf;
///
/// let candidate = Candidate {
///     relative_path: PathBuf::from("src/main.rs"),
///     absolute_path: PathBuf::from("/project/src/main.rs"),
/// };
/// assert_eq!(candidate.relative_path.to_str(), Some("src/main.rs"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The path relative to the source root, used for sorting and display.
    pub relative_path: PathBuf,
    /// The absolute path on the filesystem, used for all reads.
    pub absolute_path: PathBuf,
}

/// Tallies produced by a completed run, reported on the console by the binary.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Total number of candidates listed, before any filtering.
    pub candidate_count: usize,
    /// Files whose content made it into the output document.
    pub processed: usize,
    /// Files rejected by the binary/text heuristic.
    pub skipped_binary: usize,
    /// Files excluded by the lock-file suffix list.
    pub skipped_lockfile: usize,
    /// Where the output document was written.
    pub output_path: PathBuf,
}
