//! Configuration data structures.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::markers::Markers;

/// Main configuration structure for replacecode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Document whose code blocks get rewritten.
    #[serde(default = "default_document")]
    pub document: PathBuf,

    /// Replacement files used when none are given on the command line.
    ///
    /// Each entry is used verbatim as the file identifier in markers.
    #[serde(default)]
    pub files: Vec<String>,

    /// Marker keyword settings.
    #[serde(default)]
    pub markers: Markers,
}

fn default_document() -> PathBuf {
    PathBuf::from("README.md")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document: default_document(),
            files: Vec::new(),
            markers: Markers::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the document overridden.
    #[must_use]
    pub fn with_document(mut self, document: impl Into<PathBuf>) -> Self {
        self.document = document.into();
        self
    }

    /// Returns a copy with the replacement files overridden.
    #[must_use]
    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.document, PathBuf::from("README.md"));
        assert!(config.files.is_empty());
        assert_eq!(config.markers, Markers::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str("files = [\"src/main.rs\"]").unwrap();
        assert_eq!(config.document, PathBuf::from("README.md"));
        assert_eq!(config.files, vec!["src/main.rs"]);
    }

    #[test]
    fn test_builders() {
        let config = Config::new()
            .with_document("docs/index.md")
            .with_files(vec!["a.txt".to_string()]);
        assert_eq!(config.document, PathBuf::from("docs/index.md"));
        assert_eq!(config.files, vec!["a.txt"]);
    }
}
