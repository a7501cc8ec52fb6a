//! Line sanitizer: runs the classifier over one line.

use crate::chars::BOM;
use crate::classify::{classify, Category, Verdict};
use crate::options::CleaningOptions;
use crate::stats::CleaningStats;

/// A cleaned line and the statistics collected for it alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedLine {
    pub text: String,
    pub stats: CleaningStats,
}

impl SanitizedLine {
    /// True if at least one character was removed from the line.
    pub fn has_issues(&self) -> bool {
        self.stats.has_issues()
    }
}

/// Cleans one line, including its trailing terminator if present.
///
/// A byte order mark at offset 0 is handled before the classifier runs when
/// BOM removal is enabled; it is counted once as a zero-width removal and the
/// classifier never sees it.
pub fn sanitize_line(line: &str, options: &CleaningOptions) -> SanitizedLine {
    let mut stats = CleaningStats::new();
    let mut text = String::with_capacity(line.len());

    let mut rest = line;
    if options.remove_bom {
        if let Some(stripped) = line.strip_prefix(BOM) {
            stats.total_chars += 1;
            stats.record_removal(BOM, Category::ZeroWidth);
            rest = stripped;
        }
    }

    for c in rest.chars() {
        stats.total_chars += 1;
        let classification = classify(c, options);
        match classification.verdict {
            Verdict::Keep => text.push(c),
            Verdict::Transform(replacement) => text.push(replacement),
            Verdict::Drop => stats.record_removal(c, classification.category),
        }
    }

    SanitizedLine { text, stats }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line_untouched() {
        let result = sanitize_line("plain ascii line\n", &CleaningOptions::default());
        assert_eq!(result.text, "plain ascii line\n");
        assert_eq!(result.stats.total_chars, 17);
        assert!(!result.has_issues());
    }

    #[test]
    fn test_mixed_removals() {
        let line = "a\u{200B}b\x07c\u{00E9}d\n";
        let result = sanitize_line(line, &CleaningOptions::default());
        assert_eq!(result.text, "abcd\n");
        assert_eq!(result.stats.total_chars, 8);
        assert_eq!(result.stats.removed_chars, 3);
        assert_eq!(result.stats.zero_width_removed, 1);
        assert_eq!(result.stats.control_chars_removed, 1);
        assert_eq!(result.stats.non_ascii_removed, 1);
        assert!(result.stats.is_consistent());
    }

    #[test]
    fn test_leading_bom_counted_once() {
        let options = CleaningOptions::default();
        assert!(options.remove_bom && options.remove_zero_width);

        let result = sanitize_line("\u{FEFF}text", &options);
        assert_eq!(result.text, "text");
        assert_eq!(result.stats.total_chars, 5);
        assert_eq!(result.stats.removed_chars, 1);
        assert_eq!(result.stats.zero_width_removed, 1);
        assert_eq!(result.stats.removed_char_details[&'\u{FEFF}'], 1);
    }

    #[test]
    fn test_bom_removal_only_at_line_start() {
        let options = CleaningOptions::minimal();
        let options = CleaningOptions {
            remove_zero_width: false,
            ..options
        };

        let result = sanitize_line("\u{FEFF}a\u{FEFF}b", &options);
        assert_eq!(result.text, "a\u{FEFF}b");
        assert_eq!(result.stats.zero_width_removed, 1);
    }

    #[test]
    fn test_leading_bom_via_zero_width_rule() {
        let options = CleaningOptions {
            remove_bom: false,
            ..CleaningOptions::minimal()
        };

        let result = sanitize_line("\u{FEFF}a", &options);
        assert_eq!(result.text, "a");
        assert_eq!(result.stats.zero_width_removed, 1);
        assert_eq!(result.stats.total_chars, 2);
    }

    #[test]
    fn test_multibyte_boundaries_preserved() {
        let options = CleaningOptions::minimal();
        let result = sanitize_line("한\u{200B}글 🎉\n", &options);
        assert_eq!(result.text, "한글 🎉\n");
        assert_eq!(result.stats.total_chars, 6);
    }

    #[test]
    fn test_whitespace_transform_not_counted() {
        let options = CleaningOptions::default()
            .passthrough()
            .with_normalized_whitespace();
        let result = sanitize_line("a\tb\u{3000}c\n", &options);
        assert_eq!(result.text, "a b c\n");
        assert_eq!(result.stats.removed_chars, 0);
        assert!(!result.has_issues());
    }

    #[test]
    fn test_newline_dropped_without_preserve() {
        let options = CleaningOptions::default()
            .passthrough()
            .with_normalized_whitespace()
            .without_newlines();
        let result = sanitize_line("joined\r\n", &options);
        assert_eq!(result.text, "joined");
        assert_eq!(result.stats.removed_chars, 0);
        assert_eq!(result.stats.total_chars, 8);
    }

    #[test]
    fn test_empty_line() {
        let result = sanitize_line("", &CleaningOptions::default());
        assert!(result.text.is_empty());
        assert_eq!(result.stats, CleaningStats::new());
    }
}
