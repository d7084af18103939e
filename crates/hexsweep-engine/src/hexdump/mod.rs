//! Project hex dump (tool 1).
//!
//! Two outputs are produced from the same walk filter:
//! - a detailed per-file report ([`convert_project_to_hex`])
//! - a concatenated binary archive plus its hex rendering ([`create_binary_output`])

mod archive;
mod encode;
mod report;

pub use archive::{ArchiveSummary, create_binary_output, hex_companion_path};
pub use encode::{HEX_LINE_WIDTH, file_to_hex, wrap_hex, write_wrapped};
pub use report::{DumpSummary, convert_project_to_hex, project_title, write_report};

pub const DETAILED_REPORT_NAME: &str = "hexdump_detailed.txt";
pub const ARCHIVE_NAME: &str = "project_combined.bin";
