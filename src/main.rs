// src/main.rs

use anyhow::Result;
use clap::Parser;
use ctxcat::cli::Cli;
use ctxcat::config::Config;
use ctxcat::errors::AppError;
use ctxcat::run;

fn main() -> Result<()> {
    // Initialize logging to stderr, controlled by RUST_LOG.
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    log::debug!("Starting ctxcat v{}...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            if let Some(AppError::SourceNotFound(_)) = e.downcast_ref::<AppError>() {
                eprintln!("Error: {}", e);
            } else {
                eprintln!("Error: {:#}", e);
            }
            std::process::exit(1);
        }
    };

    println!("Scanning source: {}", config.source_dir.display());
    println!("Output target:   {}", config.output_path.display());

    match run(&config) {
        Ok(summary) => {
            println!("Done.");
            println!("  Processed: {} files", summary.processed);
            println!("  Skipped (Binary): {} files", summary.skipped_binary);
            println!("  Skipped (Lockfiles): {} files", summary.skipped_lockfile);
            println!("Generated: {}", summary.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
