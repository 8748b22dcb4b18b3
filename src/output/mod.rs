//! Output formatters for duplicate scan results.
//!
//! This module provides the formats written by the CLI:
//! - [`TextOutput`]: `<group-index>,<path>` lines on stdout
//! - [`SummaryOutput`]: scan statistics on stderr (`--stats`)
//!
//! # Example
//!
//! ```no_run
//! use mediadupe::duplicates::DuplicateFinder;
//! use mediadupe::output::{SummaryOutput, TextOutput};
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::with_defaults();
//! let (groups, summary) = finder.find_duplicates(Path::new(".")).unwrap();
//!
//! print!("{}", TextOutput::new(&groups).to_string().unwrap());
//! eprint!("{}", SummaryOutput::new(&summary).to_string().unwrap());
//! ```

pub mod summary;
pub mod text;

// Re-export main types
pub use summary::SummaryOutput;
pub use text::TextOutput;
