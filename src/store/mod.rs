//! Content-addressable blob storage
//!
//! This module implements the storage layer: a [`BlobStore`] that maps
//! SHA-256 digests to blob files under a sharded directory layout, written
//! against a narrow [`StorageBackend`] capability so the digest/path logic
//! can be tested without touching real disk.

mod backend;
mod blob_store;
mod fs;
mod layout;
mod memory;

pub use backend::StorageBackend;
pub use blob_store::BlobStore;
pub use fs::FsBackend;
pub use memory::MemoryBackend;
