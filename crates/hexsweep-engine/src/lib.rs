//! Engine for the two hexsweep tools.
//!
//! - [`hexdump`]: per-file hex report, concatenated archive and its hex rendering
//! - [`colors`]: hex color literal extraction with JSON/CSV reports
//!
//! Both run synchronously over a [`hexsweep_core::ProjectWalker`]. Per-file
//! read failures never abort a run; failures on the top-level outputs are
//! returned as [`Error`].

pub mod colors;
pub mod error;
pub mod format;
pub mod hexdump;

pub use colors::{ColorExtractor, ColorIndex, ColorSummary, ReportPaths};
pub use error::{Error, Result};
pub use hexdump::{ArchiveSummary, DumpSummary};
