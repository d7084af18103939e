use hexsweep_types::ColorKey;
use regex::Regex;
use std::sync::LazyLock;

/// `#` followed by 3, 6 or 8 hex digits and a word boundary.
///
/// Alternatives are tried in the order 3, 6, 8; the trailing `\b` decides
/// which one survives, so `#abcdef;` matches all six digits while
/// `#abcdef0` (seven digits) matches nothing.
pub const COLOR_PATTERN: &str = r"#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})\b";

static COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(COLOR_PATTERN).unwrap());

/// All non-overlapping color tokens of `line`, lowercased, in line order.
pub fn find_colors(line: &str) -> impl Iterator<Item = ColorKey> + '_ {
    COLOR_REGEX
        .find_iter(line)
        .filter_map(|m| m.as_str().parse().ok())
}
