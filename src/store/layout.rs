//! Sharded path derivation
//!
//! Blobs live two levels below the store root: the first digest byte names
//! a shard directory, the remaining 31 bytes name the file inside it. This
//! bounds the number of files in any single directory and matches the
//! layout written by npm's `content-addressable-blob-store`, which is the
//! interoperability contract of the crate.

use std::path::{Path, PathBuf};

use crate::digest::Digest;

/// Shard directory for a digest: `<base>/<2 hex chars>`
pub(crate) fn shard_dir(base: &Path, digest: &Digest) -> PathBuf {
    let hex = digest.to_hex();
    base.join(&hex[..2])
}

/// Storage path for a digest: `<base>/<2 hex chars>/<62 hex chars>`
pub(crate) fn blob_path(base: &Path, digest: &Digest) -> PathBuf {
    let hex = digest.to_hex();
    base.join(&hex[..2]).join(&hex[2..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_path_splits_first_byte() {
        let base = Path::new("/blobs");
        let digest = Digest::from_bytes([0xab; 32]);
        let path = blob_path(base, &digest);

        assert_eq!(
            path,
            PathBuf::from("/blobs/ab").join("ab".repeat(31))
        );
    }

    #[test]
    fn test_shard_dir_matches_blob_path_parent() {
        let base = Path::new("/blobs");
        let digest = Digest::compute(b"some content");

        let dir = shard_dir(base, &digest);
        let path = blob_path(base, &digest);
        assert_eq!(path.parent(), Some(dir.as_path()));
    }

    #[test]
    fn test_component_lengths() {
        let base = Path::new("/blobs");
        let digest = Digest::compute(b"xyz");
        let path = blob_path(base, &digest);

        let file = path.file_name().unwrap().to_str().unwrap();
        let shard = path.parent().unwrap().file_name().unwrap().to_str().unwrap();
        assert_eq!(shard.len(), 2);
        assert_eq!(file.len(), 62);
    }
}
