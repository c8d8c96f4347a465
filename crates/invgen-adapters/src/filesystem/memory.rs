//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use invgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::InventoryResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same state, so a test can keep one handle and give the
/// other to a service.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Make writes to `path` fail, like a file without write permission.
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.into());
        }
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path))
    }
}

impl Filesystem for MemoryFilesystem {
    fn write_file(&self, path: &Path, content: &str) -> InventoryResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.read_only.contains(path) {
            return Err(ApplicationError::WriteError {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.write_file(Path::new("a.txt"), "hello").unwrap();
        assert_eq!(handle.read_file(Path::new("a.txt")).as_deref(), Some("hello"));
        assert_eq!(handle.list_files(), [PathBuf::from("a.txt")]);
    }

    #[test]
    fn denied_path_fails_and_stays_absent() {
        let fs = MemoryFilesystem::new();
        fs.deny_writes("locked.yaml");
        assert!(fs.write_file(Path::new("locked.yaml"), "x").is_err());
        assert!(!fs.exists(Path::new("locked.yaml")));
    }
}
