//! Marker-driven replacement of fenced code blocks.
//!
//! A document marks the blocks it wants kept in sync with a comment line:
//!
//! ````markdown
//! <!-- REPLACECODE src/main.rs -->
//! ```rust
//! fn main() {}
//! ```
//! ````
//!
//! [`Replacer::update`] swaps the body of the block that follows each marker
//! for the text mapped to its file identifier. Markers inside a blockquote
//! (`> <!-- REPLACECODE ... -->`) apply their quote prefix to every line they
//! write.

mod marker;
mod replacements;
mod report;

use std::borrow::Cow;

pub use marker::{
    closing_fence, error_marker, is_blank, is_closing_fence, is_opening_fence, Marker,
    MarkerSyntax, DEFAULT_SYNTAX, FENCE,
};
pub use replacements::Replacements;
pub use report::{MarkerOutcome, MarkerReport, UpdateReport};

use crate::config::Markers;
use crate::errors::Result;
use crate::text_location::TextLocation;

/// Rewrites the code blocks following replacement markers.
#[derive(Debug, Clone, Default)]
pub struct Replacer {
    syntax: MarkerSyntax,
}

impl Replacer {
    /// Creates a replacer for the given marker keyword settings.
    pub fn new(markers: &Markers) -> Result<Self> {
        Ok(Self {
            syntax: MarkerSyntax::new(markers)?,
        })
    }

    /// Returns the updated document text.
    pub fn update<R: Replacements + ?Sized>(&self, document: &str, replacements: &R) -> String {
        self.update_with_report(document, replacements).0
    }

    /// Returns the updated document text along with what happened at each marker.
    pub fn update_with_report<R: Replacements + ?Sized>(
        &self,
        document: &str,
        replacements: &R,
    ) -> (String, UpdateReport) {
        let lines: Vec<&str> = document.trim_end_matches(['\n', '\r']).lines().collect();
        let mut output: Vec<Cow<'_, str>> = Vec::with_capacity(lines.len());
        let mut report = UpdateReport::default();
        let mut cursor = 0;

        while cursor < lines.len() {
            let line = lines[cursor];
            output.push(Cow::Borrowed(line));
            cursor += 1;

            let Some(marker) = self.syntax.parse(line) else {
                continue;
            };
            let location = TextLocation::line_only(cursor);

            let Some(replacement) = replacements.get(marker.file_id) else {
                tracing::debug!("No replacement for {} at {}", marker.file_id, location);
                report.push(MarkerReport::new(marker.file_id, location, MarkerOutcome::Unmapped));
                continue;
            };

            while cursor < lines.len() && is_blank(lines[cursor]) {
                output.push(Cow::Borrowed(lines[cursor]));
                cursor += 1;
            }

            match lines.get(cursor) {
                Some(fence) if is_opening_fence(fence, marker.prefix) => {
                    output.push(Cow::Borrowed(*fence));
                    cursor += 1;

                    // Drop the stale body; the closing fence is rewritten below.
                    let mut terminated = false;
                    while cursor < lines.len() {
                        let stale = lines[cursor];
                        cursor += 1;
                        if is_closing_fence(stale, marker.prefix) {
                            terminated = true;
                            break;
                        }
                    }

                    output.extend(
                        replacement
                            .lines()
                            .map(|content| Cow::Owned(format!("{}{}", marker.prefix, content))),
                    );
                    output.push(Cow::Owned(closing_fence(marker.prefix)));

                    let outcome = if terminated {
                        MarkerOutcome::Replaced
                    } else {
                        MarkerOutcome::Unterminated
                    };
                    report.push(MarkerReport::new(marker.file_id, location, outcome));
                }
                _ => {
                    output.push(Cow::Owned(error_marker(marker.prefix, marker.file_id)));
                    report.push(MarkerReport::new(
                        marker.file_id,
                        location,
                        MarkerOutcome::MissingBlock,
                    ));
                }
            }
        }

        let mut text = output.join("\n");
        text.push('\n');
        (text, report)
    }
}

/// Rewrites `document` using the default `REPLACECODE` marker keyword.
pub fn update<R: Replacements + ?Sized>(document: &str, replacements: &R) -> String {
    Replacer::default().update(document, replacements)
}
