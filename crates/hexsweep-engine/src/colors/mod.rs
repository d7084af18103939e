//! Hex color literal extraction (tool 2).

mod extractor;
mod index;
mod pattern;
mod report;

pub use extractor::{ColorExtractor, ExtractStats};
pub use index::{ColorIndex, ColorSummary};
pub use pattern::{COLOR_PATTERN, find_colors};
pub use report::{
    CSV_FILE_NAME, CSV_HEADER, JSON_FILE_NAME, OUTPUT_DIR_NAME, ReportPaths, resolve_output_dir,
    write_csv, write_json, write_reports,
};
