//! # cleanfile
//!
//! A text sanitization engine. It strips invisible, control and non-ASCII
//! characters, normalizes line endings across operating-system conventions,
//! and can remove Markdown or HTML markup while decoding HTML entities.
//!
//! ## Quick Start
//!
//! ```
//! use cleanfile::{clean, CleaningOptions, LineEnding};
//!
//! fn main() -> cleanfile::Result<()> {
//!     let options = CleaningOptions::default().with_line_ending(LineEnding::Unix);
//!     let cleaned = clean("Hello\u{200B} W\u{00F6}rld\r\n", &options)?;
//!
//!     assert_eq!(cleaned.text, "Hello Wrld\n");
//!     assert_eq!(cleaned.stats.removed_chars, 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Stripping markup
//!
//! Markup stripping only runs when the content is detected as the requested
//! format; otherwise the run fails with [`Error::FormatMismatch`].
//!
//! ```
//! use cleanfile::{clean, CleaningOptions, Error, StripFormat};
//!
//! let options = CleaningOptions::default().with_strip_format(StripFormat::Markdown);
//! let result = clean("Plain prose without any markup.\n", &options);
//! assert!(matches!(result, Err(Error::FormatMismatch { .. })));
//! ```
//!
//! ## Features
//!
//! - `utf16`: decode input that starts with a UTF-16 byte order mark

pub mod chars;
pub mod classify;
pub mod detect;
pub mod error;
pub mod input;
pub mod line_ending;
pub mod options;
pub mod pipeline;
pub mod sanitize;
pub mod stats;
pub mod strip;

// Re-exports
pub use classify::{classify, Category, Classification, Verdict};
pub use detect::{detect_format, score_format, DocumentFormat, FormatScores};
pub use error::{Error, Result};
pub use input::{decode_bytes, read_text};
pub use line_ending::{normalize_line_ending, split_lines};
pub use options::{CleaningOptions, LineEnding, StripFormat};
pub use pipeline::{clean, Cleaned, Cleaner};
pub use sanitize::{sanitize_line, SanitizedLine};
pub use stats::CleaningStats;

use std::path::Path;

/// Decodes raw bytes and cleans them.
pub fn clean_bytes(data: &[u8], options: &CleaningOptions) -> Result<Cleaned> {
    let text = decode_bytes(data)?;
    clean(&text, options)
}

/// Reads a file and cleans its content.
///
/// Nothing is written; the caller decides where the cleaned text goes.
///
/// # Example
///
/// ```no_run
/// use cleanfile::{clean_path, CleaningOptions};
///
/// let cleaned = clean_path("notes.txt", &CleaningOptions::default())?;
/// std::fs::write("notes_cleaned.txt", &cleaned.text)?;
/// # Ok::<(), cleanfile::Error>(())
/// ```
pub fn clean_path(path: impl AsRef<Path>, options: &CleaningOptions) -> Result<Cleaned> {
    let text = read_text(path)?;
    clean(&text, options)
}
