//! Unified diffs of pending document changes.

use similar::TextDiff;

/// Produces a unified diff between the current and updated document.
///
/// Returns an empty string when nothing changed.
pub fn unified_diff(old: &str, new: &str, path: &str) -> String {
    if old == new {
        return String::new();
    }

    let diff = TextDiff::from_lines(old, new);
    let text = diff
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", path), &format!("b/{}", path))
        .to_string();
    text
}
