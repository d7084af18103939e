use std::fmt;
use std::path::{Path, PathBuf};

/// Result type for hexsweep-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer.
///
/// Only top-level outputs produce errors; unreadable input files are
/// recorded or skipped by the tools themselves.
#[derive(Debug)]
pub enum Error {
    /// An output file could not be created, written or read back
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON report serialization failed
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// CSV report serialization failed
    Csv { path: PathBuf, source: csv::Error },
}

impl Error {
    pub(crate) fn output(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
        move |source| Error::Output {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Error::Output { path, .. } | Error::Json { path, .. } | Error::Csv { path, .. } => path,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Output { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
            Error::Json { path, source } => {
                write!(f, "Failed to write JSON report {}: {}", path.display(), source)
            }
            Error::Csv { path, source } => {
                write!(f, "Failed to write CSV report {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Output { source, .. } => Some(source),
            Error::Json { source, .. } => Some(source),
            Error::Csv { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_error_names_the_path() {
        let err = Error::output(Path::new("/out/report.txt"))(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        assert_eq!(err.path(), Path::new("/out/report.txt"));
        assert_eq!(err.to_string(), "Failed to write /out/report.txt: denied");
    }
}
