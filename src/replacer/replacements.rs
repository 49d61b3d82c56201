//! Lookup of replacement text by file identifier.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

/// A mapping from file identifier to the text that replaces its block.
pub trait Replacements {
    /// Returns the replacement text for a file identifier.
    fn get(&self, file_id: &str) -> Option<&str>;

    /// Returns true if the identifier has a replacement.
    fn contains(&self, file_id: &str) -> bool {
        self.get(file_id).is_some()
    }
}

impl<S: BuildHasher> Replacements for HashMap<String, String, S> {
    fn get(&self, file_id: &str) -> Option<&str> {
        HashMap::get(self, file_id).map(String::as_str)
    }
}

impl Replacements for BTreeMap<String, String> {
    fn get(&self, file_id: &str) -> Option<&str> {
        BTreeMap::get(self, file_id).map(String::as_str)
    }
}

impl<S: BuildHasher> Replacements for IndexMap<String, String, S> {
    fn get(&self, file_id: &str) -> Option<&str> {
        IndexMap::get(self, file_id).map(String::as_str)
    }
}
