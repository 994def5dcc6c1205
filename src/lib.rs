//! # cabstore
//!
//! A content-addressable blob store over the local filesystem.
//!
//! Blobs are identified by the SHA-256 digest of their content and stored
//! under a fixed two-level sharded directory layout interchangeable with the
//! one used by npm's `content-addressable-blob-store` module, so stores
//! produced by either implementation can be read by the other without
//! conversion.
//!
//! ## Core Concepts
//!
//! - **Blob**: an arbitrary byte sequence, immutable once written
//! - **Digest**: the 32-byte SHA-256 of a blob, its only identity
//! - **Sharded layout**: `<base>/<xx>/<yy...>` derived from the digest's
//!   hex form, bounding the number of files per directory
//!
//! ## Example
//!
//! ```ignore
//! use cabstore::BlobStore;
//!
//! let store = BlobStore::new(".blobs")?;
//! let digest = store.write(b"hello world")?;
//! let bytes = store.read(&digest)?;
//! ```

pub mod store;

mod digest;
mod error;

pub use digest::Digest;
pub use error::{Error, Result};
pub use store::{BlobStore, FsBackend, MemoryBackend, StorageBackend};
