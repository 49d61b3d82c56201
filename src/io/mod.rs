//! File I/O around the replacer.

mod diff;
mod document;
mod sources;
mod stat;

pub use diff::unified_diff;
pub use document::{Document, SaveStatus};
pub use sources::read_replacements;
pub use stat::{hexdigest_file, hexdigest_str};
