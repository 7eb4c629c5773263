//! `ctxcat` is a library and command-line tool that merges the text files of
//! a source tree into a single plain-text context file for LLM analysis.
//!
//! The pipeline has three stages, run strictly in sequence:
//! 1.  **List**: Enumerate candidate files, preferring the git index and
//!     falling back to a directory walk with a fixed exclusion set.
//! 2.  **Classify**: Decide per candidate whether it is includable text
//!     (extension denylist, then a null-byte check on the file head).
//! 3.  **Write**: Emit a header, a table of contents, and each included
//!     file's content under a path label, to one output file.
//!
//! # Example: Library Usage
//!
//! ```
//! use ctxcat::{config::Config, run};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a directory with a text file and a lock file.
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("main.rs"), "fn main() {}").unwrap();
//! fs::write(temp_dir.path().join("Cargo.lock"), "[[package]]").unwrap();
//!
//! // 2. Build a Config and run the pipeline.
//! let config = Config {
//!     source_dir: temp_dir.path().to_path_buf(),
//!     output_path: temp_dir.path().join("context.txt"),
//! };
//! let summary = run(&config).unwrap();
//!
//! assert_eq!(summary.processed, 1);
//! assert_eq!(summary.skipped_lockfile, 1);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;

// Re-export key public types for easier use as a library
pub use config::Config;
pub use core_types::{Candidate, RunSummary};

use anyhow::Result;

/// Executes the complete pipeline: list, classify, and write.
///
/// The source directory in `config` is assumed to exist (validated when the
/// `Config` was built). Returns the run tallies for the caller to report.
///
/// # Errors
/// Propagates errors touching the output file. Per-file read errors are
/// logged and skipped, never fatal.
pub fn run(config: &Config) -> Result<RunSummary> {
    let candidates = discovery::list_files(&config.source_dir);
    log::debug!("Processing {} candidate files", candidates.len());
    output::write_context(&candidates, config)
}
