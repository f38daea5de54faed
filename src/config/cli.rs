use crate::core::TraceSource;
use crate::utils::error::{CheckError, Result};
use std::fs;
use std::path::Path;

/// Reads traces straight from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFile;

impl LocalFile {
    pub fn new() -> Self {
        Self
    }
}

impl TraceSource for LocalFile {
    fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| CheckError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}
