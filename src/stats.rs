//! Cleaning statistics.
//!
//! Each line produces its own [`CleaningStats`]; the pipeline folds them into
//! the run total with [`CleaningStats::merge`]. Counters only ever grow.

use crate::classify::Category;
use crate::detect::DocumentFormat;
use serde::Serialize;
use std::collections::BTreeMap;

/// Counters collected while cleaning a document or a single line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleaningStats {
    /// Every code point examined, including removed ones.
    pub total_chars: usize,
    /// Sum of the three removal counters below.
    pub removed_chars: usize,
    pub non_ascii_removed: usize,
    pub control_chars_removed: usize,
    /// Zero-width removals, including a leading byte order mark.
    pub zero_width_removed: usize,
    pub lines_processed: usize,
    pub lines_with_issues: usize,
    pub line_endings_converted: usize,
    pub html_entities_decoded: usize,
    /// Occurrences per removed character.
    pub removed_char_details: BTreeMap<char, usize>,
    pub markdown_stripped: bool,
    pub html_stripped: bool,
    /// Set when format detection ran.
    pub format_detected: Option<DocumentFormat>,
}

impl CleaningStats {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one removed character under its category.
    ///
    /// Categories that are not removals are ignored.
    pub fn record_removal(&mut self, c: char, category: Category) {
        match category {
            Category::ZeroWidth => self.zero_width_removed += 1,
            Category::Control => self.control_chars_removed += 1,
            Category::NonAscii => self.non_ascii_removed += 1,
            Category::WhitespaceCollapsed | Category::Plain => return,
        }
        self.removed_chars += 1;
        *self.removed_char_details.entry(c).or_insert(0) += 1;
    }

    /// Adds another set of statistics into this one.
    pub fn merge(&mut self, other: &CleaningStats) {
        self.total_chars += other.total_chars;
        self.removed_chars += other.removed_chars;
        self.non_ascii_removed += other.non_ascii_removed;
        self.control_chars_removed += other.control_chars_removed;
        self.zero_width_removed += other.zero_width_removed;
        self.lines_processed += other.lines_processed;
        self.lines_with_issues += other.lines_with_issues;
        self.line_endings_converted += other.line_endings_converted;
        self.html_entities_decoded += other.html_entities_decoded;

        for (&c, &count) in &other.removed_char_details {
            *self.removed_char_details.entry(c).or_insert(0) += count;
        }

        self.markdown_stripped |= other.markdown_stripped;
        self.html_stripped |= other.html_stripped;
        if self.format_detected.is_none() {
            self.format_detected = other.format_detected;
        }
    }

    /// True if any character was removed.
    pub fn has_issues(&self) -> bool {
        self.removed_chars > 0
    }

    /// True if the output differs from the input in any counted way.
    pub fn has_changes(&self) -> bool {
        self.removed_chars > 0
            || self.line_endings_converted > 0
            || self.markdown_stripped
            || self.html_stripped
    }

    /// Removed characters as a percentage of all characters examined.
    pub fn removal_rate(&self) -> f64 {
        if self.total_chars == 0 {
            return 0.0;
        }
        self.removed_chars as f64 / self.total_chars as f64 * 100.0
    }

    /// Checks that the removal total equals the sum of its parts.
    pub fn is_consistent(&self) -> bool {
        self.removed_chars
            == self.non_ascii_removed + self.control_chars_removed + self.zero_width_removed
            && self.removed_char_details.values().sum::<usize>() == self.removed_chars
    }
}
