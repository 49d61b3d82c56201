//! Per-marker record of an update.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::text_location::TextLocation;

/// What the replacer did at a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerOutcome {
    /// The following block was rewritten.
    Replaced,
    /// No replacement was given for the file; the block was left alone.
    Unmapped,
    /// No opening fence followed the marker; an error comment was written.
    MissingBlock,
    /// The block had no closing fence; everything to the end was replaced.
    Unterminated,
}

impl MarkerOutcome {
    /// Returns true for outcomes that point at a malformed document.
    pub fn is_problem(self) -> bool {
        matches!(self, Self::MissingBlock | Self::Unterminated)
    }
}

impl fmt::Display for MarkerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Replaced => "replaced",
            Self::Unmapped => "no replacement given",
            Self::MissingBlock => "expected code block after marker",
            Self::Unterminated => "code block has no closing fence",
        };
        f.write_str(text)
    }
}

/// A single marker seen during an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerReport {
    /// File identifier named by the marker.
    pub file_id: String,
    /// Line of the marker in the input document.
    pub location: TextLocation,
    /// What happened.
    pub outcome: MarkerOutcome,
}

impl MarkerReport {
    pub fn new(file_id: &str, location: TextLocation, outcome: MarkerOutcome) -> Self {
        Self {
            file_id: file_id.to_string(),
            location,
            outcome,
        }
    }
}

/// Markers seen during an update, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    markers: Vec<MarkerReport>,
}

impl UpdateReport {
    pub(crate) fn push(&mut self, marker: MarkerReport) {
        self.markers.push(marker);
    }

    /// Returns all markers in document order.
    pub fn markers(&self) -> &[MarkerReport] {
        &self.markers
    }

    /// Returns the number of rewritten blocks, terminated or not.
    pub fn replaced(&self) -> usize {
        self.markers
            .iter()
            .filter(|m| matches!(m.outcome, MarkerOutcome::Replaced | MarkerOutcome::Unterminated))
            .count()
    }

    /// Returns markers that point at a malformed document.
    pub fn problems(&self) -> impl Iterator<Item = &MarkerReport> {
        self.markers.iter().filter(|m| m.outcome.is_problem())
    }

    /// Returns the given file identifiers that no marker refers to.
    pub fn unused<'a, I>(&self, file_ids: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let seen: HashSet<&str> = self.markers.iter().map(|m| m.file_id.as_str()).collect();
        file_ids
            .into_iter()
            .filter(|id| !seen.contains(id))
            .collect()
    }

    /// Attaches the document path to every location.
    pub fn with_document(mut self, path: &Path) -> Self {
        for marker in &mut self.markers {
            marker.location = marker.location.clone().with_filename(path);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
