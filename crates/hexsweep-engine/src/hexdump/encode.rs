use hexsweep_types::{EncodedFile, FileRecord};
use std::io::{self, Write};
use std::path::Path;

/// Hex characters per emitted line (32 bytes)
pub const HEX_LINE_WIDTH: usize = 64;

/// Split hex text into lines of `width` characters; the last may be shorter.
pub fn wrap_hex(hex: &str, width: usize) -> impl Iterator<Item = &str> {
    let width = width.max(1);
    // Hex text is ASCII, so every index is a char boundary.
    (0..hex.len())
        .step_by(width)
        .map(move |start| &hex[start..(start + width).min(hex.len())])
}

/// Write `hex` wrapped at [`HEX_LINE_WIDTH`], one `\n` after every line.
pub fn write_wrapped<W: Write>(out: &mut W, hex: &str) -> io::Result<()> {
    for line in wrap_hex(hex, HEX_LINE_WIDTH) {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Read a whole file and encode it. Read failures become
/// [`FileRecord::Failed`] so the caller can keep scanning.
pub fn file_to_hex(path: &Path) -> FileRecord {
    match std::fs::read(path) {
        Ok(content) => FileRecord::Encoded(EncodedFile {
            path: path.to_path_buf(),
            size: content.len() as u64,
            hex: hex::encode(&content),
        }),
        Err(err) => FileRecord::Failed {
            path: path.to_path_buf(),
            error: err.to_string(),
        },
    }
}
