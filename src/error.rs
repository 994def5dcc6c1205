//! Error types for cabstore

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::digest::Digest;

/// Result type alias for cabstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in blob store operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("could not create directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write blob {digest}: {source}")]
    Write {
        digest: Digest,
        #[source]
        source: io::Error,
    },

    #[error("blob not found: {0}")]
    NotFound(Digest),

    #[error("could not read blob {digest}: {source}")]
    Read {
        digest: Digest,
        #[source]
        source: io::Error,
    },

    #[error("invalid digest length: expected 32 bytes, got {len}")]
    InvalidDigest { len: usize },

    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("digest mismatch: expected {expected}, stored content hashes to {computed}")]
    DigestMismatch { expected: Digest, computed: Digest },
}
