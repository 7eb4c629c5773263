// src/cli.rs

use clap::Parser;

/// Merges the text files of a source tree into a single context file.
///
/// ctxcat lists the files under a source directory (preferring the git index,
/// falling back to a plain walk), drops binary and dependency-lock files, and
/// concatenates everything else into one plain-text document with a table of
/// contents, suitable for feeding to Large Language Models (LLMs) or other
/// text-consuming tools.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source directory to scan (default: the parent of the directory
    /// containing this executable).
    #[arg(short = 's', long, value_name = "DIR")]
    pub source: Option<String>,

    /// Output file path. A bare filename is placed next to the executable;
    /// a path with a directory component is used as given.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<String>,
}
