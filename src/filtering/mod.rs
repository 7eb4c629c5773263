// src/filtering/mod.rs

//! Provides standalone functions for file filtering logic.
//!
//! These functions decide which candidates make it into the output document.
//! They are exposed publicly to allow for their use in other contexts.

mod denylist;
mod lockfile;
mod text_detection;

pub use denylist::has_binary_extension;
pub use lockfile::is_lockfile;
pub use text_detection::{is_likely_text, is_likely_text_from_buffer};

use std::path::Path;

/// Decides whether a file is includable human-readable text.
///
/// Policy, in order: extension denylist, then the null-byte heuristic on the
/// first 1024 bytes. Read errors reject. This is a heuristic, not a
/// guarantee: binary formats without null bytes in their head and not on the
/// denylist can pass through.
///
/// # Examples
/// ```
/// # use std::fs;
/// # use ctxcat::filtering::is_includable_text;
/// # use tempfile::tempdir;
/// let temp = tempdir().unwrap();
/// let path = temp.path().join("notes.txt");
/// fs::write(&path, "hello").unwrap();
/// assert!(is_includable_text(&path));
///
/// // Denylisted extension rejects without touching the content.
/// let png = temp.path().join("fake.png");
/// fs::write(&png, "actually text").unwrap();
/// assert!(!is_includable_text(&png));
/// ```
pub fn is_includable_text(path: &Path) -> bool {
    if has_binary_extension(path) {
        return false;
    }
    is_likely_text(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_denylisted_extension_rejected_even_if_text() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("text_content.png");
        fs::write(&path, "this is perfectly fine text")?;
        assert!(!is_includable_text(&path));
        Ok(())
    }

    #[test]
    fn test_null_byte_rejected_regardless_of_extension() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("looks_like_text.txt");
        fs::write(&path, b"text\0binary")?;
        assert!(!is_includable_text(&path));
        Ok(())
    }

    #[test]
    fn test_plain_text_accepted() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("main.rs");
        fs::write(&path, "fn main() {}")?;
        assert!(is_includable_text(&path));
        Ok(())
    }
}
