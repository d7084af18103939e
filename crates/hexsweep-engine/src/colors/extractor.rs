use super::index::ColorIndex;
use super::pattern::find_colors;
use hexsweep_core::{ProjectWalker, WalkFilter};
use hexsweep_types::ColorOccurrence;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub files_scanned: usize,
    /// Unreadable or not valid UTF-8; these contribute nothing
    pub files_skipped: usize,
}

/// Collects color occurrences into a run-owned [`ColorIndex`].
///
/// ```no_run
/// use hexsweep_core::WalkFilter;
/// use hexsweep_engine::ColorExtractor;
///
/// let mut extractor = ColorExtractor::new(WalkFilter::colors_defaults());
/// extractor.scan_tree(std::path::Path::new("."));
/// let index = extractor.into_index();
/// println!("{} unique colors", index.len());
/// ```
#[derive(Debug, Clone)]
pub struct ColorExtractor {
    filter: WalkFilter,
    index: ColorIndex,
    stats: ExtractStats,
}

impl ColorExtractor {
    pub fn new(filter: WalkFilter) -> Self {
        Self {
            filter,
            index: ColorIndex::new(),
            stats: ExtractStats::default(),
        }
    }

    /// Scan every eligible file under `root` in walk order.
    pub fn scan_tree(&mut self, root: &Path) {
        let walker = ProjectWalker::new(root, self.filter.clone());
        for entry in walker.entries() {
            self.scan_file(&entry.path);
        }

        info!(
            scanned = self.stats.files_scanned,
            skipped = self.stats.files_skipped,
            colors = self.index.len(),
            occurrences = self.index.total_occurrences(),
            "color scan complete"
        );
    }

    /// Scan one file. Returns false when the file was skipped.
    ///
    /// The whole file is decoded before any line is recorded, so a file
    /// with invalid UTF-8 anywhere contributes no occurrences at all.
    pub fn scan_file(&mut self, path: &Path) -> bool {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                self.scan_text(&path.to_string_lossy(), &text);
                self.stats.files_scanned += 1;
                true
            }
            Err(err) => {
                debug!(path = %path.display(), error = %err, "skipping unreadable file");
                self.stats.files_skipped += 1;
                false
            }
        }
    }

    /// Record every color in `text` under the display name `file`.
    pub fn scan_text(&mut self, file: &str, text: &str) {
        for (i, line) in split_lines(text).enumerate() {
            for color in find_colors(line) {
                self.index.record(
                    color,
                    ColorOccurrence {
                        file: file.to_string(),
                        line_no: i + 1,
                        line: line.to_string(),
                    },
                );
            }
        }
    }

    pub fn stats(&self) -> ExtractStats {
        self.stats
    }

    pub fn index(&self) -> &ColorIndex {
        &self.index
    }

    pub fn into_index(self) -> ColorIndex {
        self.index
    }
}

/// Lines of `text` ending in `\n`, `\r\n` or a lone `\r`, terminators removed.
/// A trailing terminator does not start another line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let Some(end) = rest.find(|c: char| c == '\r' || c == '\n') else {
            let line = rest;
            rest = "";
            return Some(line);
        };

        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_text_records_line_numbers_and_line_case() {
        let mut extractor = ColorExtractor::new(WalkFilter::colors_defaults());
        extractor.scan_text("theme.css", "body {\n  color: #ABCDEF;\n}\n");

        let occurrences = extractor.index().get("#abcdef").unwrap();
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].file, "theme.css");
        assert_eq!(occurrences[0].line_no, 2);
        assert_eq!(occurrences[0].line, "  color: #ABCDEF;");
    }

    #[test]
    fn test_scan_text_strips_crlf() {
        let mut extractor = ColorExtractor::new(WalkFilter::colors_defaults());
        extractor.scan_text("a.scss", "$a: #fff;\r\n$b: #fff;\r\n");

        let occurrences = extractor.index().get("#fff").unwrap();
        assert_eq!(occurrences.len(), 2);
        assert_eq!(occurrences[1].line_no, 2);
        assert_eq!(occurrences[1].line, "$b: #fff;");
    }

    #[test]
    fn test_scan_text_splits_on_lone_carriage_return() {
        let mut extractor = ColorExtractor::new(WalkFilter::colors_defaults());
        extractor.scan_text("mac.css", "a { color: #fff; }\rb { color: #000; }\r");

        let black = extractor.index().get("#000").unwrap();
        assert_eq!(black[0].line_no, 2);
        assert_eq!(black[0].line, "b { color: #000; }");
        assert_eq!(extractor.index().get("#fff").unwrap()[0].line, "a { color: #fff; }");
    }

    #[test]
    fn test_split_lines_handles_mixed_terminators() {
        let lines: Vec<&str> = split_lines("a\r\nb\rc\n\nd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "", "d"]);

        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_lines("x\r\n").collect::<Vec<_>>(), vec!["x"]);
        assert_eq!(split_lines("\r\r").collect::<Vec<_>>(), vec!["", ""]);
    }

    #[test]
    fn test_same_color_twice_on_a_line_is_two_occurrences() {
        let mut extractor = ColorExtractor::new(WalkFilter::colors_defaults());
        extractor.scan_text("a.css", "border: #000 #000;");

        assert_eq!(extractor.index().get("#000").unwrap().len(), 2);
    }
}
