use super::index::ColorIndex;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const OUTPUT_DIR_NAME: &str = "hex-output";
pub const JSON_FILE_NAME: &str = "hexcodes.json";
pub const CSV_FILE_NAME: &str = "hexcodes.csv";
pub const CSV_HEADER: [&str; 4] = ["hex", "count", "example_file", "example_line_no"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub dir: PathBuf,
    pub json: PathBuf,
    pub csv: PathBuf,
}

/// `base/hex-output` when it can be created, otherwise `base` itself.
pub fn resolve_output_dir(base: &Path) -> PathBuf {
    let dir = base.join(OUTPUT_DIR_NAME);
    match std::fs::create_dir_all(&dir) {
        Ok(()) => dir,
        Err(err) => {
            warn!(
                dir = %dir.display(),
                error = %err,
                "cannot create output directory, writing to {}",
                base.display()
            );
            base.to_path_buf()
        }
    }
}

/// Two-space indented JSON, non-ASCII kept literally.
pub fn write_json(index: &ColorIndex, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(Error::output(path))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, index).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(Error::output(path))
}

/// One row per color, most frequent first.
pub fn write_csv(index: &ColorIndex, path: &Path) -> Result<()> {
    let csv_err = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(path)
        .map_err(csv_err)?;

    writer.write_record(CSV_HEADER).map_err(csv_err)?;
    for row in index.ranked() {
        writer
            .write_record([
                row.color.as_str(),
                row.count.to_string().as_str(),
                row.example.file.as_str(),
                row.example.line_no.to_string().as_str(),
            ])
            .map_err(csv_err)?;
    }

    writer.flush().map_err(Error::output(path))
}

/// Write `hexcodes.json` and `hexcodes.csv` under [`resolve_output_dir`].
pub fn write_reports(index: &ColorIndex, base: &Path) -> Result<ReportPaths> {
    let dir = resolve_output_dir(base);
    let paths = ReportPaths {
        json: dir.join(JSON_FILE_NAME),
        csv: dir.join(CSV_FILE_NAME),
        dir,
    };

    write_json(index, &paths.json)?;
    write_csv(index, &paths.csv)?;

    Ok(paths)
}
