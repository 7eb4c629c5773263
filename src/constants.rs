// src/constants.rs

/// Default output filename, placed next to the executable when no directory
/// component is given.
pub const DEFAULT_OUTPUT_FILENAME: &str = "code_context.txt";

/// Horizontal rule used in the header and after the table of contents.
pub const SECTION_RULE: &str = "--------------------------------------------------------------------------------";

/// Horizontal rule framing each file's path label.
pub const FILE_RULE: &str = "================================================================================";

/// How many bytes of a file's head are inspected for binary detection.
pub const TEXT_DETECTION_READ_BYTES: usize = 1024;
