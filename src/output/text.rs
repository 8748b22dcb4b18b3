//! Line-oriented text output for duplicate scan results.
//!
//! One line is generated for each member of each duplicate group:
//!
//! ```text
//! <group-index>,<file-path>
//! ```
//!
//! The index is zero-based and only identifies the group within this run.
//! Paths are written exactly as traversal produced them, without quoting, so
//! the output can be piped through `cut -d, -f2` and friends.
//!
//! # Example
//!
//! ```no_run
//! use mediadupe::duplicates::DuplicateFinder;
//! use mediadupe::output::TextOutput;
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::with_defaults();
//! let (groups, _) = finder.find_duplicates(Path::new(".")).unwrap();
//!
//! TextOutput::new(&groups).write_to(std::io::stdout().lock()).unwrap();
//! ```

use std::io::{self, Write};
use std::path::Path;

use crate::duplicates::DuplicateGroup;

/// Text output formatter.
pub struct TextOutput<'a> {
    groups: &'a [DuplicateGroup],
}

impl<'a> TextOutput<'a> {
    /// Create a new text output formatter.
    #[must_use]
    pub fn new(groups: &'a [DuplicateGroup]) -> Self {
        Self { groups }
    }

    /// Write one `<index>,<path>` line per group member.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for (idx, group) in self.groups.iter().enumerate() {
            for path in &group.files {
                write!(writer, "{},", idx)?;
                write_path(&mut writer, path)?;
                writer.write_all(b"\n")?;
            }
        }
        writer.flush()
    }

    /// Generate the output as a string.
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

/// Write a path's raw bytes where the platform allows it.
#[cfg(unix)]
fn write_path<W: Write>(writer: &mut W, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    writer.write_all(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn write_path<W: Write>(writer: &mut W, path: &Path) -> io::Result<()> {
    write!(writer, "{}", path.display())
}
