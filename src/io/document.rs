//! Loading and saving the document being rewritten.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::stat::{hexdigest_file, hexdigest_str};
use crate::errors::{ReplaceError, Result};

/// A document read from disk, remembering what it looked like when read.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    content: String,
    hexdigest: String,
}

/// Whether [`Document::save`] touched the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Written,
    Unchanged,
}

impl Document {
    /// Reads a document from disk.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path)?;
        let hexdigest = hexdigest_str(&content);
        Ok(Self {
            path,
            content,
            hexdigest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns true if `new_content` differs from what was read.
    pub fn is_changed_by(&self, new_content: &str) -> bool {
        self.content != new_content
    }

    /// Writes `new_content` back to the document's path.
    ///
    /// Fails with [`ReplaceError::FileConflict`] if the file changed on disk
    /// since it was loaded, unless `force` is set.
    pub fn save(&self, new_content: &str, force: bool) -> Result<SaveStatus> {
        if !self.is_changed_by(new_content) {
            return Ok(SaveStatus::Unchanged);
        }

        if !force {
            self.check_conflict()?;
        }

        atomic_write(&self.path, new_content)?;
        tracing::debug!("Wrote {}", self.path.display());
        Ok(SaveStatus::Written)
    }

    fn check_conflict(&self) -> Result<()> {
        let current = match hexdigest_file(&self.path) {
            Ok(digest) => Some(digest),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        if current.as_deref() != Some(self.hexdigest.as_str()) {
            return Err(ReplaceError::FileConflict {
                path: self.path.clone(),
            });
        }
        Ok(())
    }
}

/// Writes content to a temporary file next to `path`, then renames it into place.
fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = parent.join(format!(
        ".{}.replacecode-tmp-{}",
        file_name,
        std::process::id()
    ));

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}
