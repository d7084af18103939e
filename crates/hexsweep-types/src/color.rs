use crate::{Error, Result};
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Normalized hex color literal, e.g. `#1a2b3c`.
///
/// Always lowercase and always one of the three accepted shapes:
/// `#rgb`, `#rrggbb` or `#rrggbbaa`. The shapes are distinct keys, so
/// `#fff` and `#ffffff` are counted separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ColorKey(String);

impl ColorKey {
    /// Number of hex digits accepted after the `#`.
    pub const DIGIT_COUNTS: [usize; 3] = [3, 6, 8];

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ColorKey {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        let digits = token
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColor(token.to_string()))?;

        if !Self::DIGIT_COUNTS.contains(&digits.len())
            || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(Error::InvalidColor(token.to_string()));
        }

        Ok(ColorKey(token.to_ascii_lowercase()))
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ColorKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ColorKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One textual appearance of a color token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorOccurrence {
    /// Path as produced by the walk (root joined with the relative path)
    pub file: String,
    /// 1-based
    pub line_no: usize,
    /// Full line with the line terminator stripped
    pub line: String,
}
