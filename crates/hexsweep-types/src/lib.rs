pub mod color;
pub mod error;
pub mod record;

pub use color::{ColorKey, ColorOccurrence};
pub use error::{Error, Result};
pub use record::{EncodedFile, FileRecord};
