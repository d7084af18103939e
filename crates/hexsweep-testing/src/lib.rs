//! Testing infrastructure for hexsweep integration tests.
//!
//! - `TestProject`: fluent builder for throwaway project trees
//! - `assertions`: checks over the generated reports
//! - `fixtures`: sample file contents

pub mod assertions;
pub mod fixtures;
pub mod project;

pub use project::TestProject;
