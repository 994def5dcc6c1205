//! In-memory storage backend for tests

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::backend::StorageBackend;

/// In-memory, `HashMap`-backed storage
///
/// Mirrors the filesystem contract closely enough for the blob store's
/// access pattern: `put` fails with `NotFound` if the containing directory
/// was never created, and `get` fails with `NotFound` for absent paths.
#[derive(Default)]
pub struct MemoryBackend {
    files: RwLock<HashMap<PathBuf, Vec<u8>>>,
    dirs: RwLock<HashSet<PathBuf>>,
}

impl MemoryBackend {
    /// Create a new empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files currently stored
    pub fn file_count(&self) -> usize {
        self.files.read().len()
    }
}

impl StorageBackend for MemoryBackend {
    fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        let mut dirs = self.dirs.write();
        // Record every ancestor, like create_dir_all
        let mut cur = Some(path);
        while let Some(p) = cur {
            dirs.insert(p.to_path_buf());
            cur = p.parent();
        }
        Ok(())
    }

    fn put(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        if !self.dirs.read().contains(parent) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", parent.display()),
            ));
        }
        self.files.write().insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }

    fn get(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.read().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }
}

impl fmt::Debug for MemoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryBackend")
            .field("file_count", &self.file_count())
            .finish()
    }
}
