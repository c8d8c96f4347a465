//! Size-capped log file with numbered backups.
//!
//! `tracing-appender` only rotates on time boundaries, so this writer does
//! the size-based part and is handed to `tracing_appender::non_blocking`.
//!
//! Layout for `inventory.log` with `max_files = 3`:
//!
//! ```text
//! inventory.log      ← current
//! inventory.log.1    ← most recent backup
//! inventory.log.2
//! inventory.log.3    ← oldest, dropped on next rotation
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A file writer that rotates once it reaches `max_bytes`.
#[derive(Debug)]
pub struct RollingFile {
    path: PathBuf,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    /// Open (or create) `path` for appending.
    ///
    /// A `max_bytes` of 0 disables rotation. A `max_files` of 0 truncates
    /// the file in place instead of keeping backups.
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = open_append(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            path,
            max_bytes,
            max_files,
            file,
            written,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `inventory.log` → `inventory.log.<n>`.
    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn should_roll(&self, incoming: usize) -> bool {
        self.max_bytes > 0 && self.written > 0 && self.written + incoming as u64 >= self.max_bytes
    }

    fn roll(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_files == 0 {
            self.file = OpenOptions::new()
                .write(true)
                .truncate(true)
                .open(&self.path)?;
        } else {
            let oldest = self.backup_path(self.max_files);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for n in (1..self.max_files).rev() {
                let from = self.backup_path(n);
                if from.exists() {
                    fs::rename(&from, self.backup_path(n + 1))?;
                }
            }
            fs::rename(&self.path, self.backup_path(1))?;
            self.file = open_append(&self.path)?;
        }

        self.written = 0;
        Ok(())
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.should_roll(buf.len()) {
            self.roll()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn appends_without_rotation_under_limit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let mut log = RollingFile::open(&path, 1_000, 2).unwrap();
        log.write_all(b"one\n").unwrap();
        log.write_all(b"two\n").unwrap();
        log.flush().unwrap();

        assert_eq!(read(&path), "one\ntwo\n");
        assert!(!dir.path().join("app.log.1").exists());
    }

    #[test]
    fn rotates_when_limit_reached() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let mut log = RollingFile::open(&path, 10, 2).unwrap();
        log.write_all(b"12345678\n").unwrap();
        log.write_all(b"next\n").unwrap();
        log.flush().unwrap();

        assert_eq!(read(&path), "next\n");
        assert_eq!(read(&dir.path().join("app.log.1")), "12345678\n");
    }

    #[test]
    fn keeps_at_most_max_files_backups() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let mut log = RollingFile::open(&path, 4, 2).unwrap();
        for line in ["a1\n", "b2\n", "c3\n", "d4\n"] {
            log.write_all(line.as_bytes()).unwrap();
        }
        log.flush().unwrap();

        assert_eq!(read(&path), "d4\n");
        assert_eq!(read(&dir.path().join("app.log.1")), "c3\n");
        assert_eq!(read(&dir.path().join("app.log.2")), "b2\n");
        assert!(!dir.path().join("app.log.3").exists());
    }

    #[test]
    fn existing_content_counts_toward_limit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "previous run\n").unwrap();

        let mut log = RollingFile::open(&path, 16, 1).unwrap();
        log.write_all(b"new run\n").unwrap();
        log.flush().unwrap();

        assert_eq!(read(&path), "new run\n");
        assert_eq!(read(&dir.path().join("app.log.1")), "previous run\n");
    }

    #[test]
    fn zero_backups_truncates_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let mut log = RollingFile::open(&path, 4, 0).unwrap();
        log.write_all(b"old\n").unwrap();
        log.write_all(b"new\n").unwrap();
        log.flush().unwrap();

        assert_eq!(read(&path), "new\n");
        assert!(!dir.path().join("app.log.1").exists());
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs/nested/app.log");
        let log = RollingFile::open(&path, 0, 0).unwrap();
        assert!(log.path().exists());
    }
}
