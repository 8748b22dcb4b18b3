//! Scanner module for directory traversal and file fingerprinting.
//!
//! This module provides functionality for:
//! - Extension allow-list filtering
//! - Sequential, fail-fast directory walking using walkdir
//! - Content fingerprinting with SHA-1
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`filter`]: Extension allow-list ([`ExtensionFilter`])
//! - [`walker`]: Directory traversal and file discovery
//! - [`hasher`]: SHA-1 file hashing (prefix or streaming whole file)
//!
//! # Example
//!
//! ```no_run
//! use mediadupe::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."), WalkerConfig::default());
//! match walker.walk() {
//!     Ok(report) => {
//!         for file in &report.files {
//!             println!("{}: {} bytes", file.path.display(), file.size);
//!         }
//!     }
//!     Err(e) => println!("{}", e),
//! }
//! ```

pub mod filter;
pub mod hasher;
pub mod walker;

use std::io;
use std::path::{Path, PathBuf};

// Re-export main types
pub use filter::{extension_of, ExtensionFilter, DEFAULT_EXTENSIONS};
pub use hasher::{hash_to_hex, Hash, HashSpan, Hasher, PREHASH_SIZE};
pub use walker::{WalkReport, Walker};

/// An eligible file discovered during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as produced by traversal (relative if the root was relative)
    pub path: PathBuf,
    /// File size in bytes at the moment of stat
    pub size: u64,
}

impl FileEntry {
    /// Create a new FileEntry.
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Suffix allow-list applied to every regular file.
    pub filter: ExtensionFilter,

    /// Skip zero-byte files.
    pub skip_empty: bool,
}

impl WalkerConfig {
    /// Replace the extension filter.
    #[must_use]
    pub fn with_filter(mut self, filter: ExtensionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Skip zero-byte files during the walk.
    #[must_use]
    pub fn with_skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty = skip;
        self
    }
}

/// Errors that abort a directory walk.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Following the tree led back to an ancestor directory.
    #[error("Filesystem loop at {0}")]
    Loop(PathBuf),

    /// An I/O error occurred while accessing a file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Classify an I/O error raised while visiting `path`.
    #[must_use]
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}

/// Errors that can occur while fingerprinting a single file.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl HashError {
    /// Classify an I/O error raised while reading `path`.
    #[must_use]
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}
