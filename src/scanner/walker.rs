//! Directory walker implementation using walkdir for sequential traversal.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree and collecting the eligible files for duplicate detection.
//!
//! # Features
//!
//! - Depth-first traversal, children visited in file-name order
//! - Extension allow-list via [`ExtensionFilter`](super::ExtensionFilter)
//! - Optional skipping of zero-byte files
//! - Fail-fast: the first unreadable entry aborts the walk
//! - Symbolic links are not followed and never recorded
//!
//! # Example
//!
//! ```no_run
//! use mediadupe::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Pictures"), WalkerConfig::default());
//! let report = walker.walk().unwrap();
//! println!("{} eligible files", report.files.len());
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{extension_of, FileEntry, ScanError, WalkerConfig};

/// Result of a completed walk.
#[derive(Debug, Clone, Default)]
pub struct WalkReport {
    /// Eligible files in traversal order
    pub files: Vec<FileEntry>,
    /// Regular files rejected by the extension filter, counted by suffix.
    /// Files without a suffix are counted under the empty string.
    pub uncovered: BTreeMap<String, usize>,
    /// Zero-byte eligible files dropped because of `skip_empty`
    pub skipped_empty: usize,
}

impl WalkReport {
    /// Number of regular files rejected by the extension filter.
    #[must_use]
    pub fn uncovered_count(&self) -> usize {
        self.uncovered.values().sum()
    }
}

/// Directory walker for file discovery.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given path.
    ///
    /// # Arguments
    ///
    /// * `path` - Root directory to scan
    /// * `config` - Walker configuration options
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
        }
    }

    /// Walk the directory tree and collect eligible files.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if the root is missing or not a directory, or
    /// if any directory listing or file metadata cannot be read. No partial
    /// results are returned.
    pub fn walk(&self) -> Result<WalkReport, ScanError> {
        let root_meta = fs::metadata(&self.root).map_err(|e| {
            log::debug!("Cannot stat root {}: {}", self.root.display(), e);
            ScanError::from_io(&self.root, e)
        })?;
        if !root_meta.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        let mut report = WalkReport::default();

        let walk_dir = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name();

        for entry_result in walk_dir {
            let entry = entry_result.map_err(|e| self.handle_walkdir_error(e))?;
            let file_type = entry.file_type();

            if file_type.is_dir() {
                continue;
            }
            if !file_type.is_file() {
                log::trace!("Skipping non-regular entry: {}", entry.path().display());
                continue;
            }

            let path = entry.path();
            if !self.config.filter.matches(path) {
                log::trace!("Skipping file due to extension filter: {}", path.display());
                let ext = extension_of(path).unwrap_or_default();
                *report.uncovered.entry(ext).or_default() += 1;
                continue;
            }

            let metadata = entry.metadata().map_err(|e| self.handle_walkdir_error(e))?;
            let size = metadata.len();

            if size == 0 && self.config.skip_empty {
                log::debug!("Skipping empty file: {}", path.display());
                report.skipped_empty += 1;
                continue;
            }

            log::trace!("Found {} ({} bytes)", path.display(), size);
            report.files.push(FileEntry::new(entry.into_path(), size));
        }

        log::debug!(
            "Walk of {} found {} eligible files ({} not covered)",
            self.root.display(),
            report.files.len(),
            report.uncovered_count()
        );

        Ok(report)
    }

    /// Convert a walkdir error into a [`ScanError`].
    fn handle_walkdir_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        log::warn!("Walker error for {}: {}", path.display(), error);

        if error.loop_ancestor().is_some() {
            return ScanError::Loop(path);
        }
        match error.into_io_error() {
            Some(io_error) => ScanError::from_io(&path, io_error),
            None => ScanError::Io {
                path,
                source: std::io::Error::other("directory walk failed"),
            },
        }
    }
}
