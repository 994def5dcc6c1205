//! Filesystem storage backend

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::backend::StorageBackend;

/// Storage backend over the local filesystem
///
/// `put` writes to a temp file in the destination directory and renames it
/// into place, so a crash mid-write never leaves a partial blob at its
/// final path. Directories and files are created with platform-default
/// permissions, umask-filtered.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsBackend;

impl FsBackend {
    /// Create a new filesystem backend
    pub fn new() -> Self {
        FsBackend
    }
}

impl StorageBackend for FsBackend {
    fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn put(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        // Same directory as the target, so the rename never crosses a
        // filesystem boundary.
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(bytes)?;
        tmp.persist(path)?;
        Ok(())
    }

    fn get(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}
