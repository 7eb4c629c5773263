// src/output/mod.rs

//! Generates the output document from the sorted candidate list.
//!
//! Inclusion is decided (and content fully read) before anything is written,
//! so the table of contents and the body always describe the same files in
//! the same order, even when a file turns unreadable mid-run.

use crate::config::Config;
use crate::core_types::{Candidate, RunSummary};
use crate::errors::io_error_with_path;
use crate::filtering::{is_includable_text, is_lockfile};
use anyhow::Result;
use log::{debug, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

mod file_block;
mod header;
mod toc;

/// A candidate that passed every filter, with its content already decoded.
#[derive(Debug, Clone)]
pub(crate) struct IncludedFile {
    pub(crate) relative_path: PathBuf,
    /// Full content, lossily decoded: invalid UTF-8 sequences are replaced
    /// rather than failing the run.
    pub(crate) content: String,
}

/// Writes the context document for the given candidates and returns the tallies.
///
/// Candidates must already be sorted by relative path; this function preserves
/// their order. The output file is created or overwritten at
/// `config.output_path` and closed when the function returns.
///
/// # Errors
/// Fails only on errors touching the output file itself. Per-candidate read
/// errors are logged and skipped.
pub fn write_context(candidates: &[Candidate], config: &Config) -> Result<RunSummary> {
    let mut summary = RunSummary {
        candidate_count: candidates.len(),
        output_path: config.output_path.clone(),
        ..Default::default()
    };

    // Decide inclusion and read content up front, so the TOC and the body are
    // built from the same list.
    let mut included = Vec::new();
    for candidate in candidates {
        if is_lockfile(&candidate.relative_path) {
            debug!("Skipping lockfile: {}", candidate.relative_path.display());
            summary.skipped_lockfile += 1;
            continue;
        }
        if !is_includable_text(&candidate.absolute_path) {
            debug!("Skipping binary: {}", candidate.relative_path.display());
            summary.skipped_binary += 1;
            continue;
        }
        match fs::read(&candidate.absolute_path) {
            Ok(bytes) => included.push(IncludedFile {
                relative_path: candidate.relative_path.clone(),
                content: String::from_utf8_lossy(&bytes).into_owned(),
            }),
            Err(e) => {
                warn!(
                    "Error reading {}: {}",
                    candidate.relative_path.display(),
                    e
                );
            }
        }
    }

    let file = File::create(&config.output_path)
        .map_err(|e| io_error_with_path(e, &config.output_path))?;
    {
        let mut writer = BufWriter::new(file);

        header::write_header(&mut writer, &config.source_dir, summary.candidate_count)?;
        toc::write_toc(&mut writer, &included)?;
        for file in &included {
            file_block::write_file_block(&mut writer, file)?;
        }

        writer.flush()?;
    }

    summary.processed = included.len();
    debug!(
        "Output generation complete: {} written, {} binary skipped, {} lockfiles skipped",
        summary.processed, summary.skipped_binary, summary.skipped_lockfile
    );
    Ok(summary)
}
