use std::fmt;

/// Result type for hexsweep-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Token is not `#` followed by 3, 6 or 8 hex digits
    InvalidColor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidColor(token) => write!(f, "Invalid hex color: {:?}", token),
        }
    }
}

impl std::error::Error for Error {}
