// src/output/header.rs

use crate::constants::SECTION_RULE;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Writes the document header: source path, total candidate count, rule.
///
/// The count is the pre-filter candidate total, so a reader can see how much
/// of the tree was considered, not just what survived filtering.
pub(crate) fn write_header(
    writer: &mut dyn Write,
    source_dir: &Path,
    candidate_count: usize,
) -> Result<()> {
    writeln!(writer, "Context generated from: {}", source_dir.display())?;
    writeln!(writer, "File count: {}", candidate_count)?;
    writeln!(writer, "{}", SECTION_RULE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn test_write_header_output() -> Result<()> {
        let mut writer = Cursor::new(Vec::new());
        write_header(&mut writer, &PathBuf::from("/project"), 42)?;
        let output = String::from_utf8(writer.into_inner())?;
        assert_eq!(
            output,
            format!(
                "Context generated from: /project\nFile count: 42\n{}\n",
                SECTION_RULE
            )
        );
        Ok(())
    }
}
