use crate::presentation::colors as view;
use anyhow::Result;
use hexsweep_core::WalkFilter;
use hexsweep_engine::ColorExtractor;
use hexsweep_engine::colors::write_reports;
use std::path::Path;

pub fn handle(root: &Path, output_base: &Path, filter: WalkFilter) -> Result<()> {
    let mut extractor = ColorExtractor::new(filter);
    extractor.scan_tree(root);
    let index = extractor.into_index();

    let paths = write_reports(&index, output_base)?;
    view::print_summary(index.len(), &paths);

    Ok(())
}
