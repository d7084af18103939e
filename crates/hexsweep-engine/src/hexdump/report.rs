use super::encode::{file_to_hex, write_wrapped};
use crate::format::format_thousands;
use crate::{Error, Result};
use hexsweep_core::{ProjectWalker, WalkEntry, WalkFilter, normalize_path};
use hexsweep_types::FileRecord;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub(crate) const BANNER_WIDTH: usize = 80;

/// Aggregate result of a detailed dump run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpSummary {
    pub output: PathBuf,
    /// Files read successfully
    pub files_encoded: usize,
    pub files_failed: usize,
    /// Sum of sizes over successfully read files
    pub total_bytes: u64,
}

impl DumpSummary {
    fn from_records(output: &Path, records: &[FileRecord]) -> Self {
        let mut summary = DumpSummary {
            output: output.to_path_buf(),
            files_encoded: 0,
            files_failed: 0,
            total_bytes: 0,
        };

        for record in records {
            match record {
                FileRecord::Encoded(file) => {
                    summary.files_encoded += 1;
                    summary.total_bytes += file.size;
                }
                FileRecord::Failed { .. } => summary.files_failed += 1,
            }
        }

        summary
    }
}

/// Encode every eligible file under `root` into one text report at `output`.
///
/// `on_file` is called once per eligible file before it is read, in walk
/// order. Unreadable files get an ERROR section; only failures on `output`
/// itself are returned as errors.
pub fn convert_project_to_hex<F>(
    root: &Path,
    output: &Path,
    filter: &WalkFilter,
    mut on_file: F,
) -> Result<DumpSummary>
where
    F: FnMut(&WalkEntry),
{
    let walker = ProjectWalker::new(root, filter.clone());

    let records: Vec<FileRecord> = walker
        .entries()
        .map(|entry| {
            on_file(&entry);
            file_to_hex(&entry.path)
        })
        .collect();

    let summary = DumpSummary::from_records(output, &records);
    info!(
        files = summary.files_encoded,
        failed = summary.files_failed,
        bytes = summary.total_bytes,
        "scan complete, writing report"
    );

    let file = File::create(output).map_err(Error::output(output))?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, &project_title(root), &summary, &records)
        .and_then(|_| writer.flush())
        .map_err(Error::output(output))?;

    Ok(summary)
}

/// Banner title naming the project directory.
pub fn project_title(root: &Path) -> String {
    let name = normalize_path(root)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());

    format!("HEX DUMP OF PROJECT {}", name.to_uppercase())
}

pub fn write_report<W: Write>(
    out: &mut W,
    title: &str,
    summary: &DumpSummary,
    records: &[FileRecord],
) -> io::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(BANNER_WIDTH);

    writeln!(out, "{}", banner)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", banner)?;
    writeln!(out)?;
    writeln!(out, "Total files: {}", format_thousands(summary.files_encoded as u64))?;
    writeln!(out, "Total size: {} bytes", format_thousands(summary.total_bytes))?;
    writeln!(
        out,
        "Hex length: {} characters",
        format_thousands(summary.total_bytes * 2)
    )?;
    writeln!(out)?;
    writeln!(out, "{}", banner)?;
    writeln!(out)?;

    for record in records {
        match record {
            FileRecord::Failed { path, error } => {
                writeln!(out)?;
                writeln!(out, "### ERROR: {}", path.display())?;
                writeln!(out, "Error: {}", error)?;
                writeln!(out, "{}", rule)?;
            }
            FileRecord::Encoded(file) => {
                writeln!(out)?;
                writeln!(out, "### FILE: {}", file.path.display())?;
                writeln!(out, "Size: {} bytes", format_thousands(file.size))?;
                writeln!(
                    out,
                    "Hex length: {} characters",
                    format_thousands(file.hex_len() as u64)
                )?;
                writeln!(out, "{}", rule)?;
                writeln!(out, "HEX:")?;
                write_wrapped(out, &file.hex)?;
                writeln!(out, "{}", rule)?;
            }
        }
    }

    Ok(())
}
