// src/output/toc.rs

use crate::constants::SECTION_RULE;
use crate::output::IncludedFile;
use anyhow::Result;
use std::io::Write;

/// Writes the table of contents: a 1-based index and relative path for every
/// included file, in the order their bodies will follow.
pub(crate) fn write_toc(writer: &mut dyn Write, included: &[IncludedFile]) -> Result<()> {
    writeln!(writer, "Table of Contents:")?;
    for (index, file) in included.iter().enumerate() {
        writeln!(writer, "{}. {}", index + 1, file.relative_path.display())?;
    }
    writeln!(writer, "{}", SECTION_RULE)?;
    writeln!(writer)?;
    Ok(())
}
