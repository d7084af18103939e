use hexsweep_types::{ColorKey, ColorOccurrence};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Occurrences grouped by color, owned by one extraction run.
///
/// Colors keep first-seen order and occurrences keep the order they were
/// recorded in, so serialization is deterministic for a given walk.
#[derive(Debug, Clone, Default)]
pub struct ColorIndex {
    colors: Vec<(ColorKey, Vec<ColorOccurrence>)>,
    positions: HashMap<ColorKey, usize>,
}

/// One row of the ranked summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSummary<'a> {
    pub color: &'a ColorKey,
    pub count: usize,
    /// First occurrence in traversal order
    pub example: &'a ColorOccurrence,
}

impl ColorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, color: ColorKey, occurrence: ColorOccurrence) {
        match self.positions.get(&color) {
            Some(&pos) => self.colors[pos].1.push(occurrence),
            None => {
                self.positions.insert(color.clone(), self.colors.len());
                self.colors.push((color, vec![occurrence]));
            }
        }
    }

    /// Number of unique colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn total_occurrences(&self) -> usize {
        self.colors.iter().map(|(_, occ)| occ.len()).sum()
    }

    pub fn get(&self, color: &str) -> Option<&[ColorOccurrence]> {
        self.positions
            .get(color)
            .map(|&pos| self.colors[pos].1.as_slice())
    }

    /// Colors by descending occurrence count; ties keep first-seen order.
    pub fn ranked(&self) -> Vec<ColorSummary<'_>> {
        let mut ranked: Vec<ColorSummary<'_>> = self
            .colors
            .iter()
            .filter_map(|(color, occurrences)| {
                occurrences.first().map(|example| ColorSummary {
                    color,
                    count: occurrences.len(),
                    example,
                })
            })
            .collect();

        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

impl Serialize for ColorIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.colors.len()))?;
        for (color, occurrences) in &self.colors {
            map.serialize_entry(color, occurrences)?;
        }
        map.end()
    }
}
