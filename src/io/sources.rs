//! Reading the files whose contents replace marked blocks.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::errors::{ReplaceError, Result};

/// Reads each replacement file, keyed by the identifier exactly as given.
///
/// Relative identifiers are resolved against `base_dir`. Repeated identifiers
/// are read once and keep their first position.
pub fn read_replacements<I, S>(base_dir: &Path, file_ids: I) -> Result<IndexMap<String, String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut replacements = IndexMap::new();

    for file_id in file_ids {
        let file_id = file_id.as_ref();
        if replacements.contains_key(file_id) {
            continue;
        }

        let path = base_dir.join(file_id);
        let content = fs::read_to_string(&path)
            .map_err(|source| ReplaceError::Source { path, source })?;
        tracing::debug!("Read {} ({} bytes)", file_id, content.len());
        replacements.insert(file_id.to_string(), content);
    }

    Ok(replacements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_replacements() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.rs"), "fn main() {}\n").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let map = read_replacements(dir.path(), ["src/main.rs", "a.txt"]).unwrap();

        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["src/main.rs", "a.txt"]);
        assert_eq!(map["src/main.rs"], "fn main() {}\n");
    }

    #[test]
    fn test_read_replacements_duplicates() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let map = read_replacements(dir.path(), vec!["a.txt".to_string(), "a.txt".to_string()])
            .unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_read_replacements_missing() {
        let dir = tempdir().unwrap();
        let err = read_replacements(dir.path(), ["missing.txt"]).unwrap_err();

        match err {
            ReplaceError::Source { path, .. } => assert_eq!(path, dir.path().join("missing.txt")),
            other => panic!("Expected Source error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_replacements_empty() {
        let dir = tempdir().unwrap();
        let map = read_replacements(dir.path(), Vec::<String>::new()).unwrap();
        assert!(map.is_empty());
    }
}
