use std::{fs, path::PathBuf};

#[cfg(test)]
use mockall::automock;

use crate::error::PolicyViewError;

/// Configuration text source abstraction for testing
#[cfg_attr(test, automock)]
pub trait ConfigSource {
    /// Read the whole configuration export
    fn read_to_string(&self) -> Result<String, PolicyViewError>;
}

/// Configuration export stored on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for FileSource {
    fn read_to_string(&self) -> Result<String, PolicyViewError> {
        let bytes = fs::read(&self.path).map_err(|source| PolicyViewError::ConfigRead {
            path: self.path.clone(),
            source,
        })?;
        // Exports may carry Latin-1 text in comments and names
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
