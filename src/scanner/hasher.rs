//! SHA-1 file fingerprinting with streaming support.
//!
//! # Overview
//!
//! This module provides the [`Hasher`] struct for computing 20-byte SHA-1
//! fingerprints of file contents. Two spans are supported:
//!
//! - [`HashSpan::Prefix`]: digest of at most the first N bytes (the prehash)
//! - [`HashSpan::Full`]: digest of the whole file, streamed in chunks
//!
//! Each call opens the file, digests it and drops the handle before
//! returning, so at most one file is open at any time.
//!
//! # Example
//!
//! ```no_run
//! use mediadupe::scanner::{hash_to_hex, Hasher};
//! use std::path::Path;
//!
//! let hasher = Hasher::new();
//! let prehash = hasher.prehash(Path::new("photo.jpg")).unwrap();
//! let full = hasher.full_hash(Path::new("photo.jpg")).unwrap();
//! println!("{} {}", hash_to_hex(&prehash), hash_to_hex(&full));
//! ```

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha1::{Digest, Sha1};

use super::HashError;

/// A 20-byte SHA-1 content fingerprint.
pub type Hash = [u8; 20];

/// Default number of leading bytes digested by the prehash.
pub const PREHASH_SIZE: usize = 8192;

/// How much of a file contributes to its fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashSpan {
    /// At most this many bytes from the start of the file.
    Prefix(usize),
    /// The entire file content.
    Full,
}

impl HashSpan {
    /// Map a byte length to a span, where `0` means the whole file.
    #[must_use]
    pub fn from_len(len: usize) -> Self {
        if len == 0 {
            Self::Full
        } else {
            Self::Prefix(len)
        }
    }
}

/// Computes SHA-1 fingerprints of files.
#[derive(Debug, Clone)]
pub struct Hasher {
    prefix_len: usize,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher {
    /// Create a hasher whose prehash covers [`PREHASH_SIZE`] bytes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix_len: PREHASH_SIZE,
        }
    }

    /// Override the prehash length. A length of zero makes the prehash
    /// cover the whole file.
    #[must_use]
    pub fn with_prefix_len(mut self, len: usize) -> Self {
        self.prefix_len = len;
        self
    }

    /// Number of bytes covered by [`Hasher::prehash`].
    #[must_use]
    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    /// Fingerprint of the first `prefix_len` bytes (or fewer for short files).
    /// With a zero `prefix_len` this is the whole-file fingerprint.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or read.
    pub fn prehash(&self, path: &Path) -> Result<Hash, HashError> {
        self.hash(path, HashSpan::from_len(self.prefix_len))
    }

    /// Fingerprint of the entire file content.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or read.
    pub fn full_hash(&self, path: &Path) -> Result<Hash, HashError> {
        self.hash(path, HashSpan::Full)
    }

    /// Fingerprint the given span of a file.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or read.
    pub fn hash(&self, path: &Path, span: HashSpan) -> Result<Hash, HashError> {
        let file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
        let digest = match span {
            HashSpan::Prefix(len) => digest_prefix(file, len),
            HashSpan::Full => digest_all(file),
        };
        digest.map_err(|e| HashError::from_io(path, e))
    }
}

fn digest_prefix(file: File, len: usize) -> io::Result<Hash> {
    let mut hasher = Sha1::new();
    // take() stops at EOF or len, whichever comes first.
    io::copy(&mut file.take(len as u64), &mut hasher)?;
    Ok(hasher.finalize().into())
}

fn digest_all(mut file: File) -> io::Result<Hash> {
    let mut hasher = Sha1::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hasher.finalize().into())
}

/// Render a fingerprint as lowercase hex, for log messages.
#[must_use]
pub fn hash_to_hex(hash: &Hash) -> String {
    hash.iter().map(|b| format!("{:02x}", b)).collect()
}
