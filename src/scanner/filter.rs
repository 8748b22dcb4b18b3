//! Extension allow-list for files eligible for duplicate analysis.
//!
//! # Overview
//!
//! Only files whose final path component ends in one of a fixed set of
//! media and document suffixes take part in a scan. The suffix is taken
//! from the last `.` of the file name (inclusive) and compared exactly,
//! so `photo.png` matches `.png` but `photo.PNG` does not.
//!
//! # Example
//!
//! ```
//! use mediadupe::scanner::ExtensionFilter;
//! use std::path::Path;
//!
//! let filter = ExtensionFilter::default();
//! assert!(filter.matches(Path::new("holiday/beach.jpg")));
//! assert!(!filter.matches(Path::new("notes.txt")));
//!
//! // Tests and embedders can narrow the list.
//! let png_only = ExtensionFilter::new([".png"]);
//! assert!(!png_only.matches(Path::new("beach.jpg")));
//! ```

use std::collections::BTreeSet;
use std::path::Path;

/// Suffixes recognized by default: audio, image, video and document formats.
pub const DEFAULT_EXTENSIONS: [&str; 18] = [
    ".mp3", ".mp4", ".ogg", ".flac", ".wav", ".aiff", ".mid", ".png", ".jpg", ".gif", ".bmp",
    ".tga", ".jpeg", ".tif", ".tiff", ".nef", ".pdf", ".mov",
];

/// Predicate deciding whether a path is eligible for duplicate analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

impl ExtensionFilter {
    /// Create a filter from a set of suffixes, each including the leading dot.
    #[must_use]
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether the path's suffix is on the allow-list.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        extension_of(path).is_some_and(|ext| self.extensions.contains(ext.as_str()))
    }

    /// The configured suffixes, in sorted order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

/// Suffix of the final path component starting at its last `.`.
///
/// Unlike [`Path::extension`], a dot-file such as `.png` yields `.png`.
#[must_use]
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    name.rfind('.').map(|idx| name[idx..].to_string())
}
