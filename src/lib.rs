//! replacecode - keep README code blocks in sync with source files
//!
//! A markdown document marks the code blocks that mirror files in the
//! repository with an HTML comment naming the file:
//!
//! ````markdown
//! <!-- REPLACECODE examples/basic.rs -->
//! ```rust
//! // replaced with the contents of examples/basic.rs
//! ```
//! ````
//!
//! Running the replacer rewrites each marked block with the current file
//! contents, leaving everything else in the document untouched.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! let readme = "<!-- REPLACECODE hello.txt -->\n```\nold\n```\n";
//! let files = HashMap::from([("hello.txt".to_string(), "hello".to_string())]);
//!
//! assert_eq!(
//!     replacecode::update(readme, &files),
//!     "<!-- REPLACECODE hello.txt -->\n```\nhello\n```\n"
//! );
//! ```

pub mod commands;
pub mod config;
pub mod errors;
pub mod interface;
pub mod io;
pub mod replacer;
pub mod text_location;

// Re-export commonly used types
pub use config::Config;
pub use errors::{ReplaceError, Result};
pub use interface::Context;
pub use replacer::{update, MarkerOutcome, Replacements, Replacer, UpdateReport};

// Re-export command options
pub use commands::{UpdateOptions, UpdateSummary};
