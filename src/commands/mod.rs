//! Browser Commands
//!
//! Thin wrappers over browser APIs used by the UI: file download,
//! file reading and blocking alerts. Errors come back as strings.

mod dialog;
mod download;
mod file;

pub use dialog::*;
pub use download::*;
pub use file::*;
