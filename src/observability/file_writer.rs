//! Size-rotated, line-oriented trace file.
//!
//! Each exported batch is one line. Before a write, a file that has grown past
//! the size limit is shifted into numbered backups:
//!
//! ```text
//! foodgrid-otlp.json      (live)
//! foodgrid-otlp.json.1    (newest backup)
//! foodgrid-otlp.json.2
//! foodgrid-otlp.json.3    (oldest kept; the next rotation deletes it)
//! ```

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation threshold for the live file (5 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Backups kept after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Appends lines to a file, rotating it by size.
///
/// The handle is opened lazily and shared behind a `Mutex`, since the span
/// exporter must be `Sync`.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// A writer with the default 5 MiB / 3 backup limits.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error from rotating, opening or writing, or an
    /// error of kind `Other` when the lock is poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.file_path)?);
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes)
    }

    /// Shifts `.1..N-1` up by one, dropping `.N`, then moves the live file to `.1`.
    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.file_path, self.backup_path(1))
    }

    /// `<file>.<n>`
    fn backup_path(&self, n: usize) -> PathBuf {
        numbered(&self.file_path, n)
    }
}

fn numbered(path: &Path, n: usize) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{n}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn test_rotation_keeps_bounded_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        // Each line is 8 bytes, so every write after the first rotates.
        let writer = FileWriter::with_limits(path.clone(), 7, 3);

        for i in 0..10 {
            writer.write_line(&format!("line-{i:02}")).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line-09\n");
        assert_eq!(fs::read_to_string(writer.backup_path(1)).unwrap(), "line-08\n");
        assert_eq!(fs::read_to_string(writer.backup_path(3)).unwrap(), "line-06\n");
        assert!(!writer.backup_path(4).exists());

        let files = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(files, 4);
    }

    #[test]
    fn test_write_fails_without_directory() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path().join("missing").join("trace.json"));
        assert!(writer.write_line("x").is_err());
    }
}
