// tests/toc_body.rs
//
// The table of contents and the body must always describe the same files in
// the same order, including when some candidates are filtered out.

mod common;

use assert_cmd::prelude::*;
use common::ctxcat_cmd;
use std::fs;
use tempfile::tempdir;

fn toc_entries(output: &str) -> Vec<String> {
    let toc_start = output.find("Table of Contents:").unwrap();
    let toc = &output[toc_start..];
    toc.lines()
        .skip(1)
        .take_while(|l| !l.starts_with("----"))
        .filter_map(|l| l.split_once(". ").map(|(_, rest)| rest.to_string()))
        .collect()
}

fn body_labels(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|l| l.strip_prefix("File Path: "))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_toc_and_body_agree_with_mixed_candidates() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("a.txt"), "A")?;
    fs::write(temp.path().join("b.png"), [0x89u8, 0x50, 0x4E, 0x00])?;
    fs::write(temp.path().join("c.rs"), "fn c() {}")?;
    fs::write(temp.path().join("Cargo.lock"), "lock")?;
    let sub = temp.path().join("nested");
    fs::create_dir(&sub)?;
    fs::write(sub.join("d.md"), "# d")?;
    let output_path = temp.path().join("context.txt");

    ctxcat_cmd()
        .arg("-s")
        .arg(temp.path())
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let output = fs::read_to_string(&output_path)?;
    let toc = toc_entries(&output);
    let body = body_labels(&output);

    assert_eq!(toc, body);
    assert_eq!(toc, vec!["a.txt", "c.rs", "nested/d.md"]);

    temp.close()?;
    Ok(())
}

#[test]
fn test_toc_indices_are_sequential() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    // A filtered-out file between two included ones must not leave an index gap.
    fs::write(temp.path().join("a.txt"), "A")?;
    fs::write(temp.path().join("b.bin"), b"\0")?;
    fs::write(temp.path().join("c.txt"), "C")?;
    let output_path = temp.path().join("context.txt");

    ctxcat_cmd()
        .arg("-s")
        .arg(temp.path())
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let output = fs::read_to_string(&output_path)?;
    assert!(output.contains("1. a.txt\n2. c.txt"));

    temp.close()?;
    Ok(())
}
