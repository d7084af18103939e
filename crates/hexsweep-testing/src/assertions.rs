//! Custom assertions for hexsweep report validation.
//!
//! - CSV summary row parsing
//! - Wrapped hex payload checks
//! - JSON color key checks

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Read the color CSV summary: header plus data rows.
pub fn read_csv(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV {}", path.display()))?;

    let header = reader.headers()?.iter().map(String::from).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(String::from).collect());
    }

    Ok((header, rows))
}

/// Assert that CSV rows are ordered by descending `count` (second column).
pub fn assert_counts_descending(rows: &[Vec<String>]) -> Result<()> {
    let counts = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.get(1)
                .with_context(|| format!("Row {} has no count column", i))?
                .parse::<usize>()
                .with_context(|| format!("Row {} count is not a number", i))
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(pair) = counts.windows(2).find(|pair| pair[0] < pair[1]) {
        anyhow::bail!("Counts are not descending: {} before {}", pair[0], pair[1]);
    }

    Ok(())
}

/// Assert that every line of a hex payload is 64 lowercase hex digits,
/// except the last which may be shorter.
pub fn assert_hex_block(lines: &[&str]) -> Result<()> {
    for (i, line) in lines.iter().enumerate() {
        if !line.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) {
            anyhow::bail!("Line {} is not lowercase hex: {:?}", i, line);
        }

        let is_last = i + 1 == lines.len();
        if line.len() > 64 || (!is_last && line.len() != 64) || line.is_empty() {
            anyhow::bail!("Line {} has width {}", i, line.len());
        }
    }

    Ok(())
}

/// Assert that every key of the color JSON report is a normalized color.
pub fn assert_color_keys_normalized(json: &Value) -> Result<()> {
    let colors = json
        .as_object()
        .context("Expected a JSON object of colors")?;

    for key in colors.keys() {
        let valid = key.starts_with('#')
            && matches!(key.len(), 4 | 7 | 9)
            && key[1..]
                .chars()
                .all(|c| matches!(c, '0'..='9' | 'a'..='f'));

        if !valid {
            anyhow::bail!("Color key {:?} is not normalized", key);
        }
    }

    Ok(())
}
