//! Size and content bucketing for duplicate detection.
//!
//! # Overview
//!
//! This module provides the two grouping primitives of the pipeline:
//!
//! - [`group_by_size`]: buckets walked files by exact byte length (Phase 1).
//!   Files with different sizes can never be duplicates.
//! - [`group_by_content`]: buckets candidate paths by a SHA-1 fingerprint of
//!   either a bounded prefix or the whole file (Phases 2 and 3).
//!
//! Both keep singleton buckets; dropping them is the finder's job.
//!
//! # Example
//!
//! ```
//! use mediadupe::scanner::FileEntry;
//! use mediadupe::duplicates::group_by_size;
//! use std::path::PathBuf;
//!
//! let files = vec![
//!     FileEntry::new(PathBuf::from("/a.png"), 1024),
//!     FileEntry::new(PathBuf::from("/b.png"), 1024),
//!     FileEntry::new(PathBuf::from("/c.png"), 2048),
//! ];
//!
//! let (buckets, stats) = group_by_size(files);
//!
//! assert_eq!(buckets.len(), 2);
//! assert_eq!(buckets[&1024].len(), 2);
//! assert_eq!(stats.potential_duplicates, 2);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::scanner::{hash_to_hex, FileEntry, Hash, HashSpan, Hasher};

/// Paths bucketed by file size, iterated in ascending size order.
pub type SizeBuckets = BTreeMap<u64, Vec<PathBuf>>;

/// A group of two or more files believed identical.
///
/// The group is only as strong as the fingerprint that formed it: a group
/// built from prehashes shares the first bytes, one built from full hashes
/// shares the whole content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// Fingerprint shared by every file in the group
    pub hash: Hash,
    /// File size in bytes (shared by all files)
    pub size: u64,
    /// Member paths in traversal order
    pub files: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Create a new duplicate group.
    #[must_use]
    pub fn new(hash: Hash, size: u64, files: Vec<PathBuf>) -> Self {
        Self { hash, size, files }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of redundant copies (total - 1 original).
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.files.len().saturating_sub(1)
    }

    /// Bytes that would be freed by keeping a single copy.
    #[must_use]
    pub fn wasted_space(&self) -> u64 {
        self.size * self.duplicate_count() as u64
    }

    /// Hash as hexadecimal string.
    #[must_use]
    pub fn hash_hex(&self) -> String {
        hash_to_hex(&self.hash)
    }

    /// Check whether a path is a member of this group.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.files.iter().any(|f| f == path)
    }
}

/// Statistics from size grouping phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingStats {
    /// Total number of files processed
    pub total_files: usize,
    /// Total size of all files in bytes
    pub total_size: u64,
    /// Number of distinct file sizes
    pub unique_sizes: usize,
    /// Number of files sharing their size with at least one other file
    pub potential_duplicates: usize,
    /// Number of files alone in their size bucket
    pub eliminated_unique: usize,
    /// Number of zero-byte files
    pub empty_files: usize,
    /// Number of size buckets with 2+ files
    pub duplicate_groups: usize,
}

impl GroupingStats {
    /// Percentage of files eliminated by size grouping.
    #[must_use]
    pub fn elimination_rate(&self) -> f64 {
        if self.total_files == 0 {
            0.0
        } else {
            (self.eliminated_unique as f64 / self.total_files as f64) * 100.0
        }
    }
}

/// Group files by size (Phase 1 of duplicate detection).
///
/// Every file lands in exactly one bucket; order within a bucket is the
/// input order. Singleton buckets are kept.
#[must_use]
pub fn group_by_size(files: impl IntoIterator<Item = FileEntry>) -> (SizeBuckets, GroupingStats) {
    let mut buckets = SizeBuckets::new();
    let mut stats = GroupingStats::default();

    for file in files {
        stats.total_files += 1;
        stats.total_size += file.size;
        if file.size == 0 {
            stats.empty_files += 1;
        }
        buckets.entry(file.size).or_default().push(file.path);
    }

    stats.unique_sizes = buckets.len();
    for (size, paths) in &buckets {
        if paths.len() > 1 {
            stats.potential_duplicates += paths.len();
            stats.duplicate_groups += 1;
            log::debug!(
                "Size group {} bytes: {} potential duplicates",
                size,
                paths.len()
            );
        } else {
            stats.eliminated_unique += 1;
            log::trace!("Eliminated unique size {}: {}", size, paths[0].display());
        }
    }

    if stats.empty_files > 1 {
        log::debug!(
            "{} empty files share one fingerprint and will group together",
            stats.empty_files
        );
    }

    (buckets, stats)
}

/// Paths bucketed by content fingerprint.
///
/// Buckets iterate in order of first appearance of their fingerprint in
/// the input, and keep input order inside each bucket.
#[derive(Debug, Clone, Default)]
pub struct ContentBuckets {
    index: HashMap<Hash, usize>,
    buckets: Vec<(Hash, Vec<PathBuf>)>,
    skipped: Vec<PathBuf>,
}

impl ContentBuckets {
    /// Create an empty set of buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path to the bucket for `hash`, creating it if absent.
    pub fn insert(&mut self, hash: Hash, path: PathBuf) {
        match self.index.get(&hash) {
            Some(&idx) => self.buckets[idx].1.push(path),
            None => {
                self.index.insert(hash, self.buckets.len());
                self.buckets.push((hash, vec![path]));
            }
        }
    }

    /// Record a path that could not be fingerprinted.
    pub fn skip(&mut self, path: PathBuf) {
        self.skipped.push(path);
    }

    /// Paths sharing `hash`, if any.
    #[must_use]
    pub fn get(&self, hash: &Hash) -> Option<&[PathBuf]> {
        self.index.get(hash).map(|&idx| self.buckets[idx].1.as_slice())
    }

    /// Number of distinct fingerprints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Check whether no path was fingerprinted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate buckets in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&Hash, &[PathBuf])> {
        self.buckets.iter().map(|(h, p)| (h, p.as_slice()))
    }

    /// Paths skipped because they could not be opened or read.
    #[must_use]
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    /// Keep only buckets with 2+ members, as duplicate groups of `size`.
    #[must_use]
    pub fn into_duplicate_groups(self, size: u64) -> Vec<DuplicateGroup> {
        self.buckets
            .into_iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(hash, paths)| DuplicateGroup::new(hash, size, paths))
            .collect()
    }
}

/// Group candidate paths by content fingerprint.
///
/// Files are processed one at a time; each file handle is closed before the
/// next path is opened. A path that cannot be opened or read is left out of
/// every bucket and recorded in [`ContentBuckets::skipped`].
///
/// # Example
///
/// ```no_run
/// use mediadupe::duplicates::group_by_content;
/// use mediadupe::scanner::{HashSpan, Hasher};
/// use std::path::PathBuf;
///
/// let paths = vec![PathBuf::from("a.png"), PathBuf::from("b.png")];
/// let buckets = group_by_content(paths, &Hasher::new(), HashSpan::Prefix(8192));
/// for (_, members) in buckets.iter() {
///     println!("{:?}", members);
/// }
/// ```
#[must_use]
pub fn group_by_content(
    paths: impl IntoIterator<Item = PathBuf>,
    hasher: &Hasher,
    span: HashSpan,
) -> ContentBuckets {
    let mut buckets = ContentBuckets::new();

    for path in paths {
        match hasher.hash(&path, span) {
            Ok(hash) => {
                log::trace!("{:?} {}: {}", span, hash_to_hex(&hash), path.display());
                buckets.insert(hash, path);
            }
            Err(e) => {
                log::debug!("Skipping unreadable file: {}", e);
                buckets.skip(path);
            }
        }
    }

    buckets
}
