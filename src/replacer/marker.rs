//! Line classification for markers and fences.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Markers;
use crate::errors::Result;

/// The token that opens and closes a code block.
pub const FENCE: &str = "```";

/// Marker syntax for the default `REPLACECODE` keyword.
pub static DEFAULT_SYNTAX: Lazy<MarkerSyntax> = Lazy::new(|| {
    MarkerSyntax::new(&Markers::default()).expect("default marker pattern is valid")
});

/// A marker line naming the file whose contents belong in the following block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Quote prefix reproduced on every line of the block, possibly empty.
    pub prefix: &'a str,
    /// Identifier looked up in the replacement mapping.
    pub file_id: &'a str,
}

/// Compiled marker pattern.
#[derive(Debug, Clone)]
pub struct MarkerSyntax {
    pattern: Regex,
}

impl MarkerSyntax {
    /// Compiles the marker pattern for the given keyword settings.
    pub fn new(markers: &Markers) -> Result<Self> {
        let pattern = Regex::new(&markers.marker_pattern())?;
        Ok(Self { pattern })
    }

    /// Parses a marker line, returning `None` for any other line.
    pub fn parse<'a>(&self, line: &'a str) -> Option<Marker<'a>> {
        let caps = self.pattern.captures(line)?;
        let prefix = caps.name("prefix").map_or("", |m| m.as_str());
        let file_id = caps.name("file")?.as_str().trim();
        Some(Marker { prefix, file_id })
    }
}

impl Default for MarkerSyntax {
    fn default() -> Self {
        DEFAULT_SYNTAX.clone()
    }
}

/// Returns true if the line is empty after trimming.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Returns true if the line is `prefix` + fence + an optional language tag.
///
/// The prefix is matched literally, so a block quoted differently from its
/// marker is not recognised.
pub fn is_opening_fence(line: &str, prefix: &str) -> bool {
    line.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix(FENCE))
        .is_some_and(|tag| !tag.chars().any(char::is_whitespace))
}

/// Returns true if the line is exactly `prefix` + fence.
pub fn is_closing_fence(line: &str, prefix: &str) -> bool {
    line.strip_prefix(prefix) == Some(FENCE)
}

/// Formats a closing fence line.
pub fn closing_fence(prefix: &str) -> String {
    format!("{}{}", prefix, FENCE)
}

/// Formats the diagnostic written when a marker is not followed by a block.
pub fn error_marker(prefix: &str, file_id: &str) -> String {
    format!(
        "{}<!-- ERROR: Expected code block after marker for {} -->",
        prefix, file_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Option<Marker<'_>> {
        DEFAULT_SYNTAX.parse(line)
    }

    #[test]
    fn test_parse_plain_marker() {
        let marker = parse("<!-- REPLACECODE foo.txt -->").unwrap();
        assert_eq!(marker.prefix, "");
        assert_eq!(marker.file_id, "foo.txt");
    }

    #[test]
    fn test_parse_quoted_marker() {
        let marker = parse(">   <!-- REPLACECODE src/main.rs -->").unwrap();
        assert_eq!(marker.prefix, ">   ");
        assert_eq!(marker.file_id, "src/main.rs");
    }

    #[test]
    fn test_parse_trims_identifier() {
        let marker = parse("<!-- REPLACECODE   a b.txt   -->").unwrap();
        assert_eq!(marker.file_id, "a b.txt");
    }

    #[test]
    fn test_parse_rejects_other_lines() {
        assert!(parse("<!-- some comment -->").is_none());
        assert!(parse("<!-- REPLACECODE -->").is_none());
        assert!(parse("text <!-- REPLACECODE foo.txt -->").is_none());
        assert!(parse("<!-- REPLACECODE foo.txt --> trailing").is_none());
        assert!(parse(">< !-- REPLACECODE foo.txt -->").is_none());
    }

    #[test]
    fn test_parse_quote_requires_space() {
        assert!(parse("><!-- REPLACECODE foo.txt -->").is_none());
    }

    #[test]
    fn test_custom_keyword() {
        let syntax = MarkerSyntax::new(&Markers::new("SNIPPET")).unwrap();
        assert_eq!(
            syntax.parse("<!-- SNIPPET lib.rs -->").map(|m| m.file_id),
            Some("lib.rs")
        );
        assert!(syntax.parse("<!-- REPLACECODE lib.rs -->").is_none());
    }

    #[test]
    fn test_opening_fence() {
        assert!(is_opening_fence("```", ""));
        assert!(is_opening_fence("```rust", ""));
        assert!(is_opening_fence("> ```toml", "> "));
        assert!(!is_opening_fence("``` rust", ""));
        assert!(!is_opening_fence("```rust ", ""));
        assert!(!is_opening_fence("> ```", ""));
        assert!(!is_opening_fence("```", "> "));
        assert!(!is_opening_fence("~~~", ""));
    }

    #[test]
    fn test_closing_fence() {
        assert!(is_closing_fence("```", ""));
        assert!(is_closing_fence("> ```", "> "));
        assert!(!is_closing_fence("```rust", ""));
        assert!(!is_closing_fence("``` ", ""));
        assert!(!is_closing_fence(">  ```", "> "));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank(">"));
    }

    #[test]
    fn test_error_marker() {
        assert_eq!(
            error_marker("> ", "b.txt"),
            "> <!-- ERROR: Expected code block after marker for b.txt -->"
        );
    }
}
