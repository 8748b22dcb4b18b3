//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Size-based file grouping (Phase 1)
//! - Prehash comparison (Phase 2)
//! - Full hash comparison (Phase 3)
//! - Duplicate group management

pub mod finder;
pub mod groups;

pub use finder::{
    phase2_prehash, phase3_fullhash, DuplicateFinder, FinderConfig, FullhashStats, PrehashStats,
    ReportStage, ScanSummary,
};
pub use groups::{
    group_by_content, group_by_size, ContentBuckets, DuplicateGroup, GroupingStats, SizeBuckets,
};
