// src/filtering/text_detection.rs

use crate::constants::TEXT_DETECTION_READ_BYTES;
use log::{debug, warn};
use std::{fs::File, io::Read, path::Path, str};

/// Checks if a byte buffer is likely text-based.
///
/// A null byte anywhere in the buffer is the authoritative binary signal. A
/// failed UTF-8 decode alone is tolerated: the file may be in a legacy
/// encoding, and the writer decodes permissively anyway.
///
/// # Examples
/// ```
/// use ctxcat::filtering::is_likely_text_from_buffer;
///
/// assert!(is_likely_text_from_buffer(b"This is valid UTF-8 text."));
/// assert!(!is_likely_text_from_buffer(b"Contains a null byte \0."));
///
/// // Invalid UTF-8 without null bytes still passes.
/// assert!(is_likely_text_from_buffer(&[0x48, 0x65, 0x6c, 0x6c, 0x80, 0x6f]));
/// ```
pub fn is_likely_text_from_buffer(buffer_slice: &[u8]) -> bool {
    if buffer_slice.contains(&0) {
        return false;
    }
    if let Err(e) = str::from_utf8(buffer_slice) {
        // Not disqualifying on its own, but worth a trace.
        debug!("Head is not valid UTF-8 ({}), keeping anyway", e);
    }
    true
}

/// Checks if the file content is likely text-based by reading its head.
///
/// Reads the first 1024 bytes of the file and applies
/// [`is_likely_text_from_buffer`]. Any read error (missing file, permission
/// denied) counts as a rejection: a file the tool cannot read cannot be
/// included anyway.
///
/// # Examples
/// ```
/// # use std::fs;
/// # use ctxcat::filtering::is_likely_text;
/// # use tempfile::tempdir;
/// let temp = tempdir().unwrap();
/// let text_file = temp.path().join("text.txt");
/// let binary_file = temp.path().join("binary.bin");
///
/// fs::write(&text_file, "Hello, world!").unwrap();
/// assert!(is_likely_text(&text_file));
///
/// fs::write(&binary_file, b"binary\0data").unwrap();
/// assert!(!is_likely_text(&binary_file));
/// ```
pub fn is_likely_text(path: &Path) -> bool {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!("Could not open '{}' for inspection: {}", path.display(), e);
            return false;
        }
    };
    let mut buffer = [0; TEXT_DETECTION_READ_BYTES];
    let bytes_read = match file.read(&mut buffer) {
        Ok(n) => n,
        Err(e) => {
            warn!("Could not read head of '{}': {}", path.display(), e);
            return false;
        }
    };
    is_likely_text_from_buffer(&buffer[..bytes_read])
}
