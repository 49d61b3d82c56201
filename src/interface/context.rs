//! Execution context for replacecode operations.

use std::path::PathBuf;

use crate::config::Config;
use crate::errors::Result;
use crate::replacer::Replacer;

/// Context for replacecode operations.
///
/// Contains configuration and the directory paths are resolved against.
#[derive(Debug, Clone)]
pub struct Context {
    /// Configuration.
    pub config: Config,
    /// Base directory for operations.
    pub base_dir: PathBuf,
}

impl Context {
    /// Creates a new context with the given configuration.
    pub fn new(config: Config, base_dir: PathBuf) -> Self {
        Self { config, base_dir }
    }

    /// Creates a context with default configuration.
    pub fn default_for_dir(base_dir: PathBuf) -> Self {
        Self::new(Config::default(), base_dir)
    }

    /// Creates a context from the current directory.
    pub fn from_current_dir() -> Result<Self> {
        let base_dir = std::env::current_dir()?;
        let config = crate::config::read_config(&base_dir)?;
        Ok(Self::new(config, base_dir))
    }

    /// Returns the configured document resolved against the base directory.
    pub fn document_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.document)
    }

    /// Builds a replacer for the configured marker keyword.
    pub fn replacer(&self) -> Result<Replacer> {
        Replacer::new(&self.config.markers)
    }
}
