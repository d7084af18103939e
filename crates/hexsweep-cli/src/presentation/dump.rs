use super::use_color;
use hexsweep_engine::format::format_thousands;
use hexsweep_engine::{ArchiveSummary, DumpSummary};
use owo_colors::OwoColorize;
use std::path::Path;

const BANNER_WIDTH: usize = 80;

fn check_mark() -> String {
    if use_color() {
        "✓".green().bold().to_string()
    } else {
        "✓".to_string()
    }
}

fn warning_mark() -> String {
    if use_color() {
        "⚠".yellow().bold().to_string()
    } else {
        "⚠".to_string()
    }
}

pub fn print_scan_start(root: &Path, output: &Path) {
    println!("Scanning directory: {}", root.display());
    println!("Writing output to: {}", output.display());
    println!();
}

pub fn print_processing(relative: &Path) {
    println!("Processing: {}", relative.display());
}

pub fn dump_summary_lines(summary: &DumpSummary) -> Vec<String> {
    let mark = check_mark();
    let mut lines = vec![
        format!(
            "{} Done! {} files converted",
            mark,
            format_thousands(summary.files_encoded as u64)
        ),
        format!(
            "{} Total size: {} bytes",
            mark,
            format_thousands(summary.total_bytes)
        ),
        format!("{} Output: {}", mark, summary.output.display()),
    ];

    if summary.files_failed > 0 {
        lines.push(format!(
            "{} {} files could not be read (see ERROR sections)",
            warning_mark(),
            format_thousands(summary.files_failed as u64)
        ));
    }

    lines
}

pub fn print_dump_summary(summary: &DumpSummary) {
    println!();
    for line in dump_summary_lines(summary) {
        println!("{}", line);
    }
}

pub fn print_archive_start(archive: &Path) {
    println!();
    println!("Creating binary archive: {}", archive.display());
}

pub fn print_archive_summary(summary: &ArchiveSummary) {
    let mark = check_mark();
    println!("{} Binary file: {}", mark, summary.archive.display());
    println!("{} Hex file: {}", mark, summary.hex_file.display());
}

pub fn print_complete() {
    let banner = "=".repeat(BANNER_WIDTH);
    println!();
    println!("{}", banner);
    if use_color() {
        println!("{}", "CONVERSION COMPLETE".bold());
    } else {
        println!("CONVERSION COMPLETE");
    }
    println!("{}", banner);
}
