//! Source file loading and validation.
//!
//! Problems with a single file (unreadable, binary, oversized) are
//! reported as rejection reasons so the caller can record them without
//! aborting the rest of the repository scan.

use std::path::Path;
use std::str;

use tracing::debug;

use crate::BINARY_SNIFF_BYTES;

/// Check whether a file name looks like Python source.
pub fn is_python_source(name: &str) -> bool {
    name.ends_with(".py") || name.ends_with(".pyw")
}

/// Loads and validates the content of individual source files.
pub struct SourceLoader {
    max_file_size: usize,
}

impl SourceLoader {
    /// Create a loader with the given size limit.
    pub fn new(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    /// Read and decode one file.
    ///
    /// Returns the decoded text, or a rejection reason for this file
    /// alone.
    pub fn load(&self, path: &Path) -> Result<String, String> {
        let content = std::fs::read(path)
            .map_err(|e| format!("Failed to read file: {}", e))?;

        if content.is_empty() {
            return Err("File is empty".to_string());
        }

        if content.len() > self.max_file_size {
            return Err(format!(
                "File too large: {} bytes (max: {})",
                content.len(),
                self.max_file_size
            ));
        }

        if is_binary_content(&content, BINARY_SNIFF_BYTES) {
            return Err("Binary file detected".to_string());
        }

        let (text, encoding) = decode(&content);
        debug!("Loaded {} ({} bytes, {})", path.display(), content.len(), encoding);

        Ok(normalize_line_endings(&text))
    }
}

/// Check if content appears to be binary.
pub fn is_binary_content(content: &[u8], sample_size: usize) -> bool {
    let sample = &content[..content.len().min(sample_size)];

    // Null bytes are a strong indicator of binary
    if sample.contains(&0) {
        return true;
    }

    // Ratio of non-printable characters
    let non_printable = sample
        .iter()
        .filter(|&&b| b < 32 && !matches!(b, 9 | 10 | 13)) // tab, newline, carriage return
        .count();

    !sample.is_empty() && (non_printable as f64 / sample.len() as f64) > 0.1
}

/// Decode content, trying UTF-8, then UTF-16 with a BOM, then Latin-1.
///
/// Returns the decoded string and the encoding used.
pub fn decode(content: &[u8]) -> (String, &'static str) {
    if let Ok(s) = str::from_utf8(content) {
        return (s.to_string(), "utf-8");
    }

    if content.len() >= 2 && content[0] == 0xFF && content[1] == 0xFE {
        let utf16: Vec<u16> = content[2..]
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]))
            .collect();
        if let Ok(s) = String::from_utf16(&utf16) {
            return (s, "utf-16-le");
        }
    }

    if content.len() >= 2 && content[0] == 0xFE && content[1] == 0xFF {
        let utf16: Vec<u16> = content[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        if let Ok(s) = String::from_utf16(&utf16) {
            return (s, "utf-16-be");
        }
    }

    // Latin-1 always succeeds
    let s: String = content.iter().map(|&b| b as char).collect();
    (s, "latin-1")
}

/// Normalize line endings to Unix-style (LF).
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}
