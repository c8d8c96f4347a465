//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use invgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{InventoryError, InventoryResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn write_file(&self, path: &Path, content: &str) -> InventoryResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e))
    }
}

fn map_io_error(path: &Path, e: io::Error) -> InventoryError {
    ApplicationError::WriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
