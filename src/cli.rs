//! Command-line interface definitions for mediadupe.
//!
//! The CLI takes exactly one positional folder. Anything else (no folder,
//! several folders, an unknown flag) prints [`USAGE`] and exits with
//! status 0; see [`crate::run_app`] and `main`.
//!
//! # Example
//!
//! ```bash
//! # Report groups sharing size and the first 8 KiB
//! mediadupe ~/Pictures
//!
//! # Only report whole-file matches, with statistics on stderr
//! mediadupe --verify --stats ~/Pictures
//!
//! # Info-level logging
//! mediadupe -v ~/Pictures
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::duplicates::{FinderConfig, ReportStage};
use crate::scanner::WalkerConfig;

/// Program name shown in the usage message.
pub const PROGRAM_NAME: &str = "mediadupe";

/// Usage message printed when the argument count is wrong.
pub const USAGE: &str = "Usage: mediadupe <folder>

List all files that are duplicates based on content hash

Output as:
Index of duplication, filename
";

/// List media files that are duplicates based on content hash.
///
/// Output is one `<index>,<path>` line per duplicate file, where files with
/// the same index share size and fingerprint.
#[derive(Debug, Parser)]
#[command(name = PROGRAM_NAME)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder to scan; exactly one is expected
    #[arg(value_name = "FOLDER")]
    pub paths: Vec<PathBuf>,

    /// Increase verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report only files whose whole content hashes equal
    ///
    /// By default groups share size and the first 8 KiB.
    #[arg(long)]
    pub verify: bool,

    /// Ignore zero-byte files
    #[arg(long)]
    pub skip_empty: bool,

    /// Print scan statistics to stderr after the report
    #[arg(long)]
    pub stats: bool,
}

impl Cli {
    /// The single folder to scan, or `None` if the argument count is wrong.
    #[must_use]
    pub fn folder(&self) -> Option<&PathBuf> {
        match self.paths.as_slice() {
            [folder] => Some(folder),
            _ => None,
        }
    }

    /// Build the finder configuration selected by the flags.
    #[must_use]
    pub fn finder_config(&self) -> FinderConfig {
        let stage = if self.verify {
            ReportStage::Full
        } else {
            ReportStage::Prefix
        };

        FinderConfig::default()
            .with_walker_config(WalkerConfig::default().with_skip_empty(self.skip_empty))
            .with_report_stage(stage)
    }
}
