//! Duplicate finder implementation with multi-phase detection.
//!
//! # Overview
//!
//! This module orchestrates the duplicate detection pipeline:
//! 1. **Phase 1 - Size grouping**: Walk the tree and bucket eligible files
//!    by size (see [`crate::duplicates::groups`])
//! 2. **Phase 2 - Prehash**: Hash the first 8 KiB of same-size files
//! 3. **Phase 3 - Full hash**: Hash the entire content of prehash matches
//!
//! Phase 3 always runs. Which phase's groups are reported is chosen by
//! [`ReportStage`]; the default reports the prehash groups.
//!
//! # Example
//!
//! ```no_run
//! use mediadupe::duplicates::{DuplicateFinder, FinderConfig, ReportStage};
//! use std::path::Path;
//!
//! let config = FinderConfig::default().with_report_stage(ReportStage::Full);
//! let finder = DuplicateFinder::new(config);
//!
//! let (groups, summary) = finder.find_duplicates(Path::new("/some/path")).unwrap();
//! println!("Found {} duplicate groups", summary.reported_groups);
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::groups::{group_by_content, group_by_size, DuplicateGroup, SizeBuckets};
use crate::scanner::{HashSpan, Hasher, ScanError, Walker, WalkerConfig, PREHASH_SIZE};

/// Which pipeline phase produces the reported groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStage {
    /// Groups sharing size and the first `prefix_len` bytes.
    #[default]
    Prefix,
    /// Groups confirmed by a whole-file hash.
    Full,
}

/// Configuration for the duplicate finder.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Walker configuration for directory traversal.
    pub walker_config: WalkerConfig,
    /// Number of leading bytes digested in Phase 2.
    pub prefix_len: usize,
    /// Phase whose groups are returned.
    pub report_stage: ReportStage,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            walker_config: WalkerConfig::default(),
            prefix_len: PREHASH_SIZE,
            report_stage: ReportStage::default(),
        }
    }
}

impl FinderConfig {
    /// Set the walker configuration.
    #[must_use]
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Set the prehash length. Zero makes Phase 2 hash whole files.
    #[must_use]
    pub fn with_prefix_len(mut self, len: usize) -> Self {
        self.prefix_len = len;
        self
    }

    /// Choose which phase's groups are reported.
    #[must_use]
    pub fn with_report_stage(mut self, stage: ReportStage) -> Self {
        self.report_stage = stage;
        self
    }
}

/// Statistics from prehash phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrehashStats {
    /// Files that entered Phase 2 (members of size buckets with 2+ files)
    pub input_files: usize,
    /// Files skipped because they could not be opened or read
    pub unreadable: Vec<PathBuf>,
    /// Files sharing size and prehash with at least one other file
    pub potential_duplicates: usize,
    /// Prehash groups with 2+ files
    pub duplicate_groups: usize,
}

impl PrehashStats {
    /// Percentage of files eliminated by prehash comparison.
    #[must_use]
    pub fn elimination_rate(&self) -> f64 {
        if self.input_files == 0 {
            0.0
        } else {
            let eliminated = self.input_files - self.potential_duplicates;
            (eliminated as f64 / self.input_files as f64) * 100.0
        }
    }
}

/// Group same-size files by prehash (Phase 2).
///
/// Only size buckets with 2+ files are read. Each bucket is grouped
/// separately, so files of different sizes never share a group. Groups come
/// out in ascending size order, then by first appearance.
#[must_use]
pub fn phase2_prehash(
    size_buckets: SizeBuckets,
    hasher: &Hasher,
) -> (Vec<DuplicateGroup>, PrehashStats) {
    let mut stats = PrehashStats::default();
    let mut groups = Vec::new();
    let span = HashSpan::from_len(hasher.prefix_len());

    for (size, paths) in size_buckets {
        if paths.len() < 2 {
            continue;
        }
        stats.input_files += paths.len();

        let buckets = group_by_content(paths, hasher, span);
        stats.unreadable.extend_from_slice(buckets.skipped());

        for group in buckets.into_duplicate_groups(size) {
            log::debug!(
                "Prehash group {}: {} potential duplicates",
                group.hash_hex(),
                group.len()
            );
            stats.potential_duplicates += group.len();
            groups.push(group);
        }
    }

    stats.duplicate_groups = groups.len();

    log::info!(
        "Phase 2 complete: {} files → {} potential duplicates ({:.1}% eliminated)",
        stats.input_files,
        stats.potential_duplicates,
        stats.elimination_rate()
    );

    (groups, stats)
}

/// Statistics from full hash phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullhashStats {
    /// Files that entered Phase 3
    pub input_files: usize,
    /// Files skipped because they could not be opened or read
    pub unreadable: Vec<PathBuf>,
    /// Total bytes hashed across readable files
    pub bytes_hashed: u64,
    /// Files confirmed as duplicates of at least one other file
    pub confirmed_files: usize,
    /// Number of confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Prehash groups whose membership the full hash did not reproduce
    pub unconfirmed_groups: usize,
}

/// Re-group prehash groups by whole-file hash (Phase 3).
///
/// A prehash group that splits, shrinks or vanishes under the full hash is
/// counted in [`FullhashStats::unconfirmed_groups`].
#[must_use]
pub fn phase3_fullhash(
    prehash_groups: &[DuplicateGroup],
    hasher: &Hasher,
) -> (Vec<DuplicateGroup>, FullhashStats) {
    let mut stats = FullhashStats::default();
    let mut groups = Vec::new();

    for (idx, prehash_group) in prehash_groups.iter().enumerate() {
        stats.input_files += prehash_group.len();

        let buckets =
            group_by_content(prehash_group.files.iter().cloned(), hasher, HashSpan::Full);
        stats.unreadable.extend_from_slice(buckets.skipped());
        let readable = prehash_group.len() - buckets.skipped().len();
        stats.bytes_hashed += prehash_group.size * readable as u64;

        let confirmed = buckets.into_duplicate_groups(prehash_group.size);
        let reproduced = confirmed.len() == 1 && confirmed[0].len() == prehash_group.len();
        if !reproduced {
            stats.unconfirmed_groups += 1;
            log::debug!(
                "Prehash group {} ({} files) split into {} full-hash groups",
                idx,
                prehash_group.len(),
                confirmed.len()
            );
        }

        for group in confirmed {
            stats.confirmed_files += group.len();
            groups.push(group);
        }
    }

    stats.duplicate_groups = groups.len();

    log::info!(
        "Phase 3 complete: {} files → {} confirmed in {} groups ({} bytes hashed)",
        stats.input_files,
        stats.confirmed_files,
        stats.duplicate_groups,
        stats.bytes_hashed
    );

    (groups, stats)
}

/// Summary statistics from a duplicate scan.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Number of eligible files found by the walk
    pub total_files: usize,
    /// Total size of eligible files in bytes
    pub total_size: u64,
    /// Regular files rejected by the extension filter, by suffix
    pub uncovered: BTreeMap<String, usize>,
    /// Zero-byte files skipped by the walker
    pub skipped_empty: usize,
    /// Files sharing their size with another file
    pub size_candidates: usize,
    /// Files sharing size and prehash with another file
    pub prefix_candidates: usize,
    /// Files sharing size and full hash with another file
    pub full_candidates: usize,
    /// Number of prehash groups
    pub prefix_groups: usize,
    /// Number of full-hash groups
    pub full_groups: usize,
    /// Prehash groups not reproduced by the full hash
    pub unconfirmed_groups: usize,
    /// Files skipped during hashing (unreadable or vanished)
    pub unreadable: Vec<PathBuf>,
    /// Phase whose groups were reported
    pub report_stage: ReportStage,
    /// Number of reported groups
    pub reported_groups: usize,
    /// Bytes reclaimable by keeping one copy per reported group
    pub reclaimable_space: u64,
    /// Duration of the entire scan
    pub scan_duration: Duration,
}

impl ScanSummary {
    /// Number of regular files rejected by the extension filter.
    #[must_use]
    pub fn uncovered_count(&self) -> usize {
        self.uncovered.values().sum()
    }
}

/// Duplicate finder that orchestrates the multi-phase detection pipeline.
///
/// Runs sequentially on the calling thread:
/// 1. **Walk + Phase 1** - Collect eligible files and group them by size
/// 2. **Phase 2** - Compare prehashes of same-size files
/// 3. **Phase 3** - Compute full hashes of prehash matches
#[derive(Debug, Clone)]
pub struct DuplicateFinder {
    config: FinderConfig,
    hasher: Hasher,
}

impl DuplicateFinder {
    /// Create a new duplicate finder with the given configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        let hasher = Hasher::new().with_prefix_len(config.prefix_len);
        Self { config, hasher }
    }

    /// Create a new duplicate finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    /// Find all duplicate files under the given directory.
    ///
    /// Returns the groups of the configured [`ReportStage`] along with
    /// summary statistics covering every phase.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if the walk fails. No hashing happens in that
    /// case. Unreadable files during hashing are skipped, not errors.
    pub fn find_duplicates(
        &self,
        path: &Path,
    ) -> Result<(Vec<DuplicateGroup>, ScanSummary), ScanError> {
        let start_time = Instant::now();

        log::info!("Starting duplicate scan of {}", path.display());

        let walk = Walker::new(path, self.config.walker_config.clone()).walk()?;
        let (size_buckets, size_stats) = group_by_size(walk.files);

        log::info!(
            "Phase 1 complete: {} files → {} potential duplicates ({:.1}% eliminated)",
            size_stats.total_files,
            size_stats.potential_duplicates,
            size_stats.elimination_rate()
        );

        let (prefix_groups, prehash_stats) = phase2_prehash(size_buckets, &self.hasher);
        let (full_groups, fullhash_stats) = phase3_fullhash(&prefix_groups, &self.hasher);

        if fullhash_stats.unconfirmed_groups > 0
            && self.config.report_stage == ReportStage::Prefix
        {
            log::info!(
                "{} reported group(s) match on the first {} bytes only; \
                 the full-hash stage does not confirm them",
                fullhash_stats.unconfirmed_groups,
                self.hasher.prefix_len()
            );
        }

        let mut unreadable = prehash_stats.unreadable;
        unreadable.extend(fullhash_stats.unreadable);

        let reported = match self.config.report_stage {
            ReportStage::Prefix => prefix_groups,
            ReportStage::Full => full_groups,
        };

        let summary = ScanSummary {
            total_files: size_stats.total_files,
            total_size: size_stats.total_size,
            uncovered: walk.uncovered,
            skipped_empty: walk.skipped_empty,
            size_candidates: size_stats.potential_duplicates,
            prefix_candidates: prehash_stats.potential_duplicates,
            full_candidates: fullhash_stats.confirmed_files,
            prefix_groups: prehash_stats.duplicate_groups,
            full_groups: fullhash_stats.duplicate_groups,
            unconfirmed_groups: fullhash_stats.unconfirmed_groups,
            unreadable,
            report_stage: self.config.report_stage,
            reported_groups: reported.len(),
            reclaimable_space: reported.iter().map(DuplicateGroup::wasted_space).sum(),
            scan_duration: start_time.elapsed(),
        };

        log::info!(
            "Scan complete in {:.2?}: {} groups reported",
            summary.scan_duration,
            summary.reported_groups
        );

        Ok((reported, summary))
    }
}
