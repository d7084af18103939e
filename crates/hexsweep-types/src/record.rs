use std::path::PathBuf;

/// Result of encoding a single scanned file.
///
/// A failed read is a value, not an error: the scan records it and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRecord {
    Encoded(EncodedFile),
    Failed { path: PathBuf, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFile {
    pub path: PathBuf,
    /// Byte count of the file content
    pub size: u64,
    /// Two lowercase hex digits per byte, no separators
    pub hex: String,
}

impl EncodedFile {
    /// Always `2 * size`.
    pub fn hex_len(&self) -> usize {
        self.hex.len()
    }
}
