//! Content-addressable blob store

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::digest::Digest;
use crate::error::{Error, Result};

use super::backend::StorageBackend;
use super::fs::FsBackend;
use super::layout::{blob_path, shard_dir};

/// A content-addressable blob store
///
/// Maps the SHA-256 digest of a blob to its bytes, stored under a fixed
/// two-level sharded layout beneath a base directory. Keys are derived, not
/// assigned: a given blob always maps to exactly one digest and one path,
/// so writing the same content twice is a no-op in effect.
///
/// All operations are synchronous and touch the backend directly; there is
/// no cache and no in-process locking. Safety under concurrent use relies
/// on the backend's guarantees, which hold for this access pattern:
/// distinct content goes to distinct paths, and identical content writes
/// identical bytes.
pub struct BlobStore<B: StorageBackend = FsBackend> {
    base: PathBuf,
    backend: B,
    verify: bool,
}

impl BlobStore<FsBackend> {
    /// Open or create a store rooted at `base`
    ///
    /// Creates the base directory and any missing parents. Fails with
    /// [`Error::Directory`] if it cannot be created or is not usable as a
    /// directory.
    pub fn new(base: impl Into<PathBuf>) -> Result<Self> {
        Self::with_backend(base, FsBackend::new())
    }
}

impl<B: StorageBackend> BlobStore<B> {
    /// Open or create a store rooted at `base` over a custom backend
    pub fn with_backend(base: impl Into<PathBuf>, backend: B) -> Result<Self> {
        let base = base.into();
        backend
            .ensure_dir(&base)
            .map_err(|source| Error::Directory {
                path: base.clone(),
                source,
            })?;
        Ok(BlobStore {
            base,
            backend,
            verify: false,
        })
    }

    /// Re-hash blob bytes on every read and fail on mismatch
    ///
    /// Off by default: the store normally trusts the backend and returns
    /// whatever bytes are on disk, matching the reference implementation.
    pub fn verify_reads(mut self, enabled: bool) -> Self {
        self.verify = enabled;
        self
    }

    /// Store a blob and return its digest
    ///
    /// Ensures the shard directory exists, then writes the blob to its
    /// derived path, replacing any existing file there. Creates at most one
    /// new directory and one file per call.
    pub fn write(&self, blob: &[u8]) -> Result<Digest> {
        let digest = Digest::compute(blob);

        let dir = shard_dir(&self.base, &digest);
        self.backend
            .ensure_dir(&dir)
            .map_err(|source| Error::Directory { path: dir, source })?;

        let path = blob_path(&self.base, &digest);
        self.backend
            .put(&path, blob)
            .map_err(|source| Error::Write { digest, source })?;

        Ok(digest)
    }

    /// Retrieve a blob by its digest
    ///
    /// Fails with [`Error::NotFound`] if no blob with this digest was ever
    /// written, and [`Error::Read`] for any other backend failure.
    pub fn read(&self, digest: &Digest) -> Result<Vec<u8>> {
        let path = blob_path(&self.base, digest);
        let bytes = self.backend.get(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                Error::NotFound(*digest)
            } else {
                Error::Read {
                    digest: *digest,
                    source,
                }
            }
        })?;

        if self.verify {
            let computed = Digest::compute(&bytes);
            if computed != *digest {
                return Err(Error::DigestMismatch {
                    expected: *digest,
                    computed,
                });
            }
        }

        Ok(bytes)
    }

    /// Root directory of the store
    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl<B: StorageBackend> fmt::Debug for BlobStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlobStore")
            .field("base", &self.base)
            .field("verify", &self.verify)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryBackend;

    fn memory_store() -> BlobStore<MemoryBackend> {
        BlobStore::with_backend("/store", MemoryBackend::new()).unwrap()
    }

    #[test]
    fn test_write_read_roundtrip() {
        let store = memory_store();

        let digest = store.write(b"hello, blobs").unwrap();
        assert_eq!(store.read(&digest).unwrap(), b"hello, blobs");
    }

    #[test]
    fn test_empty_blob_roundtrip() {
        let store = memory_store();

        let digest = store.write(b"").unwrap();
        assert_eq!(
            digest.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(store.read(&digest).unwrap(), b"");
    }

    #[test]
    fn test_write_is_idempotent() {
        let store = memory_store();

        let d1 = store.write(b"same content").unwrap();
        let d2 = store.write(b"same content").unwrap();

        assert_eq!(d1, d2);
        assert_eq!(store.read(&d1).unwrap(), b"same content");
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let store = memory_store();

        let digest = Digest::compute(b"never written");
        assert!(matches!(store.read(&digest), Err(Error::NotFound(d)) if d == digest));
    }

    #[test]
    fn test_digest_matches_sha256() {
        let store = memory_store();

        let digest = store.write(b"abc").unwrap();
        assert_eq!(digest, Digest::compute(b"abc"));
        assert_eq!(
            digest.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_verified_read_detects_corruption() {
        let backend = MemoryBackend::new();
        let store = BlobStore::with_backend("/store", backend).unwrap();
        let store = store.verify_reads(true);

        let digest = store.write(b"pristine").unwrap();

        // Clobber the stored bytes behind the store's back.
        let path = blob_path(store.base(), &digest);
        store.backend.put(&path, b"corrupted").unwrap();

        let err = store.read(&digest).unwrap_err();
        assert!(matches!(err, Error::DigestMismatch { expected, .. } if expected == digest));
    }

    #[test]
    fn test_unverified_read_returns_corrupt_bytes() {
        let store = memory_store();

        let digest = store.write(b"pristine").unwrap();
        let path = blob_path(store.base(), &digest);
        store.backend.put(&path, b"corrupted").unwrap();

        // Default behavior trusts the backend.
        assert_eq!(store.read(&digest).unwrap(), b"corrupted");
    }

    #[test]
    fn test_verified_read_passes_on_clean_data() {
        let store = memory_store().verify_reads(true);

        let digest = store.write(b"clean").unwrap();
        assert_eq!(store.read(&digest).unwrap(), b"clean");
    }
}
