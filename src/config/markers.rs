//! Marker keyword configuration.

use serde::{Deserialize, Serialize};

/// Keyword settings for replacement markers.
///
/// A marker line has the form `[> ]<!-- KEYWORD FILEID -->`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    /// The word that introduces a replacement marker.
    #[serde(default = "default_keyword")]
    pub keyword: String,
}

fn default_keyword() -> String {
    "REPLACECODE".to_string()
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            keyword: default_keyword(),
        }
    }
}

impl Markers {
    /// Creates a marker configuration with a custom keyword.
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
        }
    }

    /// Formats a marker line for the given file identifier.
    pub fn format_marker(&self, prefix: &str, file_id: &str) -> String {
        format!("{}<!-- {} {} -->", prefix, self.keyword, file_id)
    }

    /// Creates a regex pattern for matching marker lines.
    ///
    /// Capture `prefix` holds the quote prefix, `file` the raw identifier.
    pub fn marker_pattern(&self) -> String {
        format!(
            r"^(?P<prefix>> +)?<!-- {}\s+(?P<file>.+?)\s*-->$",
            regex::escape(&self.keyword)
        )
    }
}
