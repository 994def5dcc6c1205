//! Storage capability trait

use std::io;
use std::path::Path;

/// Narrow storage interface the blob store is written against
///
/// Implementations can use:
/// - The local filesystem ([`FsBackend`](super::FsBackend))
/// - An in-memory map for tests ([`MemoryBackend`](super::MemoryBackend))
///
/// Methods return raw `io::Error`s; the blob store maps them onto its own
/// error taxonomy. Absence must be reported as `io::ErrorKind::NotFound`.
pub trait StorageBackend: Send + Sync {
    /// Create a directory and any missing parents
    ///
    /// Creating an already-existing directory is not an error.
    fn ensure_dir(&self, path: &Path) -> io::Result<()>;

    /// Write bytes to a path, replacing any existing file
    ///
    /// The containing directory must already exist.
    fn put(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;

    /// Read the full contents of the file at a path
    fn get(&self, path: &Path) -> io::Result<Vec<u8>>;
}
