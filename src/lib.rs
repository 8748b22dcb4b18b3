//! mediadupe - Media Duplicate File Finder
//!
//! Finds media files with identical content under a directory tree using a
//! three-phase pipeline: size grouping, an 8 KiB prefix SHA-1 and a whole-file
//! SHA-1. Each duplicate is printed as `<group-index>,<path>`.

use std::io::Write;

use anyhow::Context;

pub mod cli;
pub mod duplicates;
pub mod logging;
pub mod output;
pub mod scanner;

use cli::{Cli, USAGE};
use duplicates::{DuplicateFinder, ReportStage};
use output::{SummaryOutput, TextOutput};

/// Run the application for parsed arguments.
///
/// The report goes to `stdout`. A wrong argument count prints [`USAGE`]
/// and a traversal failure prints its message to `stdout`; both return
/// `Ok`. With `--stats`, the scan summary is written to `stderr`.
///
/// # Errors
///
/// Returns an error only if writing to `stdout` or `stderr` fails.
pub fn run_app<O: Write, E: Write>(cli: &Cli, mut stdout: O, stderr: E) -> anyhow::Result<()> {
    let Some(folder) = cli.folder() else {
        log::debug!("Expected one folder, got {}", cli.paths.len());
        stdout
            .write_all(USAGE.as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write usage")?;
        return Ok(());
    };

    let finder = DuplicateFinder::new(cli.finder_config());
    let (groups, summary) = match finder.find_duplicates(folder) {
        Ok(result) => result,
        Err(e) => {
            log::debug!("Scan of {} aborted: {:?}", folder.display(), e);
            writeln!(stdout, "{}", e)
                .and_then(|()| stdout.flush())
                .context("Failed to write error message")?;
            return Ok(());
        }
    };

    if summary.report_stage == ReportStage::Prefix && summary.unconfirmed_groups > 0 {
        log::warn!(
            "{} group(s) share only their first bytes; \
             use --verify to report whole-file matches",
            summary.unconfirmed_groups
        );
    }

    TextOutput::new(&groups)
        .write_to(&mut stdout)
        .context("Failed to write report")?;

    if cli.stats {
        SummaryOutput::new(&summary)
            .write_to(stderr)
            .context("Failed to write statistics")?;
    }

    Ok(())
}
