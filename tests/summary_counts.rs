// tests/summary_counts.rs

mod common;

use assert_cmd::prelude::*;
use common::ctxcat_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_report_counts_each_skip_category() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("a.txt"), "hello")?;
    fs::write(temp.path().join("b.png"), [0x89u8, 0x50, 0x4E, 0x47, 0x00, 0x01])?;
    fs::write(temp.path().join("Cargo.lock"), "[[package]]\nname = \"x\"")?;
    let output_path = temp.path().join("context.txt");

    ctxcat_cmd()
        .arg("-s")
        .arg(temp.path())
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Done."))
        .stdout(predicate::str::contains("Processed: 1 files"))
        .stdout(predicate::str::contains("Skipped (Binary): 1 files"))
        .stdout(predicate::str::contains("Skipped (Lockfiles): 1 files"));

    let output = fs::read_to_string(&output_path)?;
    // All three are candidates, only a.txt survives filtering.
    assert!(output.contains("File count: 3"));
    assert!(output.contains("1. a.txt"));
    assert!(!output.contains("2. "));
    assert!(!output.contains("b.png"));
    assert!(!output.contains("Cargo.lock"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_report_names_scan_and_target_paths() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("a.txt"), "A")?;
    let output_path = temp.path().join("context.txt");

    ctxcat_cmd()
        .arg("-s")
        .arg(temp.path())
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanning source: "))
        .stdout(predicate::str::contains("Output target:   "))
        .stdout(predicate::str::contains(output_path.to_str().unwrap()));

    temp.close()?;
    Ok(())
}
