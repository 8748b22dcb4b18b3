//! Human-readable scan statistics, written to stderr with `--stats`.

use std::io::{self, Write};

use crate::duplicates::{ReportStage, ScanSummary};

/// Statistics formatter for a [`ScanSummary`].
pub struct SummaryOutput<'a> {
    summary: &'a ScanSummary,
}

impl<'a> SummaryOutput<'a> {
    /// Create a new summary formatter.
    #[must_use]
    pub fn new(summary: &'a ScanSummary) -> Self {
        Self { summary }
    }

    /// Write the statistics block.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let s = self.summary;
        let stage = match s.report_stage {
            ReportStage::Prefix => "prefix",
            ReportStage::Full => "full",
        };

        writeln!(
            writer,
            "Files found: {}",
            s.total_files + s.skipped_empty + s.uncovered_count()
        )?;
        writeln!(writer, "Eligible files analyzed: {}", s.total_files)?;
        writeln!(writer, "Eligible bytes: {}", s.total_size)?;
        writeln!(writer, "Files sharing size with another file: {}", s.size_candidates)?;
        writeln!(
            writer,
            "Files sharing size and first bytes with another file: {}",
            s.prefix_candidates
        )?;
        writeln!(
            writer,
            "Files sharing size and SHA-1 with another file: {}",
            s.full_candidates
        )?;
        writeln!(
            writer,
            "Groups: {} by prefix, {} by full hash, {} reported ({})",
            s.prefix_groups, s.full_groups, s.reported_groups, stage
        )?;
        if s.skipped_empty > 0 {
            writeln!(writer, "Empty files skipped: {}", s.skipped_empty)?;
        }
        if !s.unreadable.is_empty() {
            writeln!(writer, "Unreadable files skipped: {}", s.unreadable.len())?;
        }
        writeln!(writer, "Reclaimable bytes: {}", s.reclaimable_space)?;

        if !s.uncovered.is_empty() {
            writeln!(writer, "Extensions not covered:")?;
            for (ext, count) in &s.uncovered {
                let ext = if ext.is_empty() { "(none)" } else { ext.as_str() };
                writeln!(writer, "{}, {} files", ext, count)?;
            }
        }

        writer.flush()
    }

    /// Generate the statistics block as a string.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn to_string(&self) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
