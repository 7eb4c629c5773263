//! Resolves CLI arguments into a validated `Config`.
//!
//! All path defaulting lives here: the default source is the parent of the
//! directory containing the executable, and a bare output filename lands next
//! to the executable. The source directory is the only thing validated up
//! front; a missing source is the tool's single fatal error.

use crate::cli::Cli;
use crate::constants::DEFAULT_OUTPUT_FILENAME;
use crate::errors::AppError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Validated configuration for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute, canonicalized path of the directory to scan.
    pub source_dir: PathBuf,
    /// Path the output document is written to.
    pub output_path: PathBuf,
}

impl Config {
    /// Builds a `Config` from parsed CLI arguments.
    ///
    /// # Errors
    /// Returns [`AppError::SourceNotFound`] (wrapped in `anyhow::Error`) if the
    /// resolved source directory does not exist or is not a directory.
    pub fn from_cli(cli: &Cli) -> Result<Config> {
        let exe_dir = executable_dir()?;
        resolve(cli.source.as_deref(), cli.output.as_deref(), &exe_dir)
    }
}

/// Directory containing the running executable.
fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(dir.to_path_buf())
}

/// Resolves source and output paths against an explicit executable directory.
///
/// Split out from [`Config::from_cli`] so the defaulting rules can be tested
/// without depending on where the test binary lives.
pub(crate) fn resolve(
    source: Option<&str>,
    output: Option<&str>,
    exe_dir: &Path,
) -> Result<Config> {
    let source_dir = match source {
        Some(s) => PathBuf::from(s),
        // Mirrors the conventional "tool lives in a scripts/ subdirectory of
        // the project" layout: scan the directory above the tool.
        None => exe_dir.join(".."),
    };

    if !source_dir.is_dir() {
        return Err(AppError::SourceNotFound(source_dir.display().to_string()).into());
    }
    let source_dir = source_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve source directory '{}'", source_dir.display()))?;

    let output_path = match output {
        Some(o) => {
            let given = PathBuf::from(o);
            if has_directory_component(&given) {
                given
            } else {
                exe_dir.join(given)
            }
        }
        None => exe_dir.join(DEFAULT_OUTPUT_FILENAME),
    };

    Ok(Config {
        source_dir,
        output_path,
    })
}

fn has_directory_component(path: &Path) -> bool {
    path.parent()
        .map(|p| !p.as_os_str().is_empty())
        .unwrap_or(false)
}
