use super::encode::write_wrapped;
use super::report::BANNER_WIDTH;
use crate::format::format_thousands;
use crate::{Error, Result};
use hexsweep_core::{ProjectWalker, WalkFilter};
use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub archive: PathBuf,
    pub hex_file: PathBuf,
    /// Files written to the archive, readable or not
    pub files: usize,
    pub files_failed: usize,
    /// Size of the finished archive
    pub archive_bytes: u64,
}

/// `project_combined.bin` -> `project_combined_hex.txt`.
///
/// A path without a `.bin` extension keeps its full name and gets the
/// suffix appended.
pub fn hex_companion_path(archive: &Path) -> PathBuf {
    let base = if archive.extension() == Some(OsStr::new("bin")) {
        archive.file_stem()
    } else {
        archive.file_name()
    };

    let mut name = base.map(OsStr::to_os_string).unwrap_or_else(OsString::new);
    name.push("_hex.txt");
    archive.with_file_name(name)
}

/// Concatenate every eligible file under `root` into one binary archive,
/// then write its hex rendering next to it.
///
/// Files are processed in sorted path order so an unchanged tree always
/// produces a byte-identical archive. Each file is framed as
/// `\n--- <relative path> ---\n<bytes>\n`; an unreadable file contributes
/// `ERROR: <message>` in place of its bytes.
pub fn create_binary_output(
    root: &Path,
    output: &Path,
    filter: &WalkFilter,
) -> Result<ArchiveSummary> {
    let walker = ProjectWalker::new(root, filter.clone());
    let entries = walker.sorted_entries();

    let file = File::create(output).map_err(Error::output(output))?;
    let mut writer = BufWriter::new(file);
    let mut files_failed = 0;

    for entry in &entries {
        let header = format!("\n--- {} ---\n", entry.relative.display());
        writer
            .write_all(header.as_bytes())
            .map_err(Error::output(output))?;

        let body = match std::fs::read(&entry.path) {
            Ok(content) => content,
            Err(err) => {
                debug!(path = %entry.path.display(), error = %err, "archiving read error");
                files_failed += 1;
                format!("ERROR: {}", err).into_bytes()
            }
        };

        writer.write_all(&body).map_err(Error::output(output))?;
        writer.write_all(b"\n").map_err(Error::output(output))?;
    }

    writer.flush().map_err(Error::output(output))?;
    drop(writer);

    let content = std::fs::read(output).map_err(Error::output(output))?;
    let hex_file = hex_companion_path(output);
    write_hex_file(&hex_file, &content)?;

    info!(
        archive = %output.display(),
        files = entries.len(),
        bytes = content.len(),
        "archive written"
    );

    Ok(ArchiveSummary {
        archive: output.to_path_buf(),
        hex_file,
        files: entries.len(),
        files_failed,
        archive_bytes: content.len() as u64,
    })
}

fn write_hex_file(path: &Path, content: &[u8]) -> Result<()> {
    let file = File::create(path).map_err(Error::output(path))?;
    let mut out = BufWriter::new(file);
    let banner = "=".repeat(BANNER_WIDTH);
    let size = content.len() as u64;

    let write = |out: &mut BufWriter<File>| -> std::io::Result<()> {
        writeln!(out, "COMPLETE HEX DUMP")?;
        writeln!(out, "{}", banner)?;
        writeln!(out, "Size: {} bytes", format_thousands(size))?;
        writeln!(out, "Hex length: {} characters", format_thousands(size * 2))?;
        writeln!(out, "{}", banner)?;
        writeln!(out)?;
        write_wrapped(out, &hex::encode(content))?;
        out.flush()
    };

    write(&mut out).map_err(Error::output(path))
}
