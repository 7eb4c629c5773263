// src/output/file_block.rs

use crate::constants::FILE_RULE;
use crate::output::IncludedFile;
use anyhow::Result;
use std::io::Write;

/// Writes a single file's block: rule, path label, rule, content, blank line.
pub(crate) fn write_file_block(writer: &mut dyn Write, file: &IncludedFile) -> Result<()> {
    writeln!(writer, "{}", FILE_RULE)?;
    writeln!(writer, "File Path: {}", file.relative_path.display())?;
    writeln!(writer, "{}", FILE_RULE)?;
    // Content is written as-is (already lossily decoded), followed by a blank
    // line separating it from the next block.
    writer.write_all(file.content.as_bytes())?;
    writer.write_all(b"\n\n")?;
    Ok(())
}
