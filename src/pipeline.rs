//! Sanitization pipeline.
//!
//! A run goes through these phases:
//!
//! 1. **Format check** (only when stripping is requested): detect the format
//!    of the whole document and fail with [`Error::FormatMismatch`] if it is
//!    not the requested one.
//! 2. **Strip**: remove Markdown or HTML markup.
//! 3. **Line scan**: classify each line and collect per-line statistics.
//! 4. **Fold**: rejoin CRLF pairs split by removed characters, normalize each
//!    terminator and sum the per-line statistics, in line order, into the run
//!    total.
//!
//! Lines do not depend on each other, so the scan may run on the rayon pool.

use crate::detect::detect_format;
use crate::error::{Error, Result};
use crate::line_ending::{normalize_line_ending, split_lines};
use crate::options::{CleaningOptions, StripFormat};
use crate::sanitize::{sanitize_line, SanitizedLine};
use crate::stats::CleaningStats;
use crate::strip::{strip_html, strip_markdown};
use rayon::prelude::*;
use std::borrow::Cow;

/// Minimum number of lines before the scan is spread across threads.
pub const PARALLEL_LINE_THRESHOLD: usize = 4096;

/// Output of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    /// The cleaned document.
    pub text: String,
    /// Statistics for the whole run.
    pub stats: CleaningStats,
}

/// Configured sanitization pipeline.
///
/// # Example
///
/// ```
/// use cleanfile::{Cleaner, CleaningOptions, LineEnding};
///
/// let options = CleaningOptions::default().with_line_ending(LineEnding::Unix);
/// let cleaned = Cleaner::new(options).clean("caf\u{00E9}\u{200B}\r\n")?;
///
/// assert_eq!(cleaned.text, "caf\n");
/// assert_eq!(cleaned.stats.removed_chars, 2);
/// assert_eq!(cleaned.stats.line_endings_converted, 1);
/// # Ok::<(), cleanfile::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Cleaner {
    options: CleaningOptions,
    parallel: bool,
    parallel_threshold: usize,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(CleaningOptions::default())
    }
}

impl Cleaner {
    /// Creates a pipeline for the given options.
    pub fn new(options: CleaningOptions) -> Self {
        Self {
            options,
            parallel: true,
            parallel_threshold: PARALLEL_LINE_THRESHOLD,
        }
    }

    /// Disables parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Sets the line count at which the scan goes parallel.
    pub fn with_parallel_threshold(mut self, lines: usize) -> Self {
        self.parallel_threshold = lines;
        self
    }

    /// Returns the options this pipeline runs with.
    pub fn options(&self) -> &CleaningOptions {
        &self.options
    }

    /// Cleans a whole document.
    ///
    /// Fails before any line is scanned if the requested strip format does
    /// not match the detected one.
    pub fn clean(&self, input: &str) -> Result<Cleaned> {
        let mut stats = CleaningStats::new();
        let content = self.strip_markup(input, &mut stats)?;

        let lines = split_lines(&content);
        let sanitized = if self.parallel && lines.len() >= self.parallel_threshold {
            log::trace!("scanning {} lines in parallel", lines.len());
            lines
                .par_iter()
                .map(|line| sanitize_line(line, &self.options))
                .collect::<Vec<_>>()
        } else {
            log::trace!("scanning {} lines sequentially", lines.len());
            lines
                .iter()
                .map(|line| sanitize_line(line, &self.options))
                .collect::<Vec<_>>()
        };

        let mut text = String::with_capacity(content.len());
        for (index, line) in rejoin_split_terminators(sanitized).into_iter().enumerate() {
            let (line, line_stats) = self.finish_line(line);
            if line_stats.has_issues() {
                log::debug!(
                    "line {}: removed {} character(s) [zw {}, ctrl {}, non-ascii {}]",
                    index + 1,
                    line_stats.removed_chars,
                    line_stats.zero_width_removed,
                    line_stats.control_chars_removed,
                    line_stats.non_ascii_removed
                );
            }
            text.push_str(&line);
            stats.merge(&line_stats);
        }

        Ok(Cleaned { text, stats })
    }

    /// Runs the format check and strip phases.
    fn strip_markup<'a>(&self, input: &'a str, stats: &mut CleaningStats) -> Result<Cow<'a, str>> {
        let Some(requested) = self.options.strip_format else {
            return Ok(Cow::Borrowed(input));
        };

        let detected = detect_format(input);
        stats.format_detected = Some(detected);

        if !requested.matches(detected) {
            return Err(Error::FormatMismatch {
                requested,
                detected,
            });
        }

        let stripped = match requested {
            StripFormat::Markdown => {
                stats.markdown_stripped = true;
                strip_markdown(input)
            }
            StripFormat::Html => {
                let result = strip_html(input);
                stats.html_stripped = true;
                stats.html_entities_decoded = result.entities_decoded;
                result.text
            }
        };

        Ok(Cow::Owned(stripped))
    }

    /// Converts the terminator of a sanitized line and sets its line counts.
    fn finish_line(&self, sanitized: SanitizedLine) -> (String, CleaningStats) {
        let mut stats = sanitized.stats;

        let (text, converted) = normalize_line_ending(&sanitized.text, self.options.line_ending);
        let text = text.into_owned();

        stats.lines_processed = 1;
        if stats.has_issues() {
            stats.lines_with_issues = 1;
        }
        if converted {
            stats.line_endings_converted = 1;
        }

        (text, stats)
    }
}

/// Merges a line ending in a bare `\r` with a following line that cleaned
/// down to a lone `\n`.
///
/// Splitting happens before classification, so `\r<removed>\n` arrives as
/// two lines even though the cleaned text holds a single CRLF.
fn rejoin_split_terminators(lines: Vec<SanitizedLine>) -> Vec<SanitizedLine> {
    let mut joined: Vec<SanitizedLine> = Vec::with_capacity(lines.len());

    for line in lines {
        if line.text == "\n" {
            if let Some(prev) = joined.last_mut() {
                if prev.text.ends_with('\r') {
                    prev.text.push('\n');
                    prev.stats.merge(&line.stats);
                    continue;
                }
            }
        }
        joined.push(line);
    }

    joined
}

/// Cleans a document with the given options.
pub fn clean(input: &str, options: &CleaningOptions) -> Result<Cleaned> {
    Cleaner::new(options.clone()).clean(input)
}
