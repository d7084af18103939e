use crate::presentation::dump as view;
use anyhow::{Context, Result};
use hexsweep_core::WalkFilter;
use hexsweep_engine::hexdump::{
    ARCHIVE_NAME, DETAILED_REPORT_NAME, convert_project_to_hex, create_binary_output,
};
use std::path::Path;

pub fn handle(root: &Path, output_dir: &Path, filter: &WalkFilter) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let detailed = output_dir.join(DETAILED_REPORT_NAME);
    view::print_scan_start(root, &detailed);

    let summary = convert_project_to_hex(root, &detailed, filter, |entry| {
        view::print_processing(&entry.relative)
    })?;
    view::print_dump_summary(&summary);

    let archive = output_dir.join(ARCHIVE_NAME);
    view::print_archive_start(&archive);
    let archive_summary = create_binary_output(root, &archive, filter)?;
    view::print_archive_summary(&archive_summary);

    view::print_complete();
    Ok(())
}
