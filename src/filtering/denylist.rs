// src/filtering/denylist.rs

use std::path::Path;

// Extensions rejected without inspecting content (case-insensitive).
const BINARY_EXTENSIONS: &[&str] = &[
    // --- Images ---
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "tiff", "webp",
    // --- Audio ---
    "mp3", "wav", "ogg", "flac", "aac", "m4a",
    // --- Video ---
    "mp4", "mov", "avi", "mkv", "webm",
    // --- Archives ---
    "zip", "tar", "gz", "7z", "rar",
    // --- Executables & compiled artifacts ---
    "exe", "dll", "so", "dylib", "bin", "obj", "o", "a", "lib",
    // --- Documents ---
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
    // --- Bytecode & packages ---
    "pyc", "pyo", "pyd", "class", "jar", "war", "ear",
    // --- Databases & sampler libraries ---
    "db", "sqlite", "sqlite3", "nc", "nicnt", "nkx", "nki", "nkm", "nkr",
];

/// Checks whether a path's extension is on the fixed binary denylist.
///
/// This is a quick rejection ahead of content inspection; formats not on the
/// list still go through the null-byte heuristic.
///
/// # Examples
/// ```
/// use ctxcat::filtering::has_binary_extension;
/// use std::path::Path;
///
/// assert!(has_binary_extension(Path::new("logo.PNG")));
/// assert!(!has_binary_extension(Path::new("main.rs")));
/// ```
pub fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_lowercase();
            BINARY_EXTENSIONS.iter().any(|&known| lower == known)
        })
        .unwrap_or(false)
}
