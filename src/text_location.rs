//! Line locations for marker reports.

use std::fmt;
use std::path::{Path, PathBuf};

/// A line within a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextLocation {
    /// The document path (if known).
    pub filename: Option<PathBuf>,
    /// Line number (1-indexed).
    pub line: usize,
}

impl TextLocation {
    /// Creates a location with only line information.
    pub fn line_only(line: usize) -> Self {
        Self {
            filename: None,
            line,
        }
    }

    /// Creates a location with file and line.
    pub fn file_line(filename: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            filename: Some(filename.into()),
            line,
        }
    }

    /// Returns a new location attached to the given document.
    pub fn with_filename(mut self, filename: &Path) -> Self {
        self.filename = Some(filename.to_path_buf());
        self
    }
}

impl Default for TextLocation {
    fn default() -> Self {
        Self::line_only(1)
    }
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filename {
            Some(path) => write!(f, "{}:{}", path.display(), self.line),
            None => write!(f, "line {}", self.line),
        }
    }
}
