//! Per-character classification.
//!
//! The decision table is evaluated in a fixed order and the first rule that
//! applies wins:
//!
//! 1. zero-width removal
//! 2. non-ASCII removal
//! 3. control character removal (newline, carriage return and tab survive)
//! 4. whitespace normalization
//!
//! Anything left over is kept unchanged.

use crate::chars::is_zero_width;
use crate::options::CleaningOptions;
use serde::Serialize;

/// What happens to a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Emit the character as-is.
    Keep,
    /// Emit a replacement character instead.
    Transform(char),
    /// Emit nothing.
    Drop,
}

/// Why a verdict was reached; drives the statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ZeroWidth,
    Control,
    NonAscii,
    WhitespaceCollapsed,
    /// No rule touched the character.
    Plain,
}

impl Category {
    /// True for the categories counted as removed characters.
    pub fn is_removal(self) -> bool {
        matches!(
            self,
            Category::ZeroWidth | Category::Control | Category::NonAscii
        )
    }
}

/// Result of classifying one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub verdict: Verdict,
    pub category: Category,
}

impl Classification {
    const fn keep() -> Self {
        Self {
            verdict: Verdict::Keep,
            category: Category::Plain,
        }
    }

    const fn drop(category: Category) -> Self {
        Self {
            verdict: Verdict::Drop,
            category,
        }
    }

    /// True if this character is counted as a removal.
    pub fn is_removal(&self) -> bool {
        self.verdict == Verdict::Drop && self.category.is_removal()
    }
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Classifies a single character under the given options.
pub fn classify(c: char, options: &CleaningOptions) -> Classification {
    if options.remove_zero_width && is_zero_width(c) {
        return Classification::drop(Category::ZeroWidth);
    }

    if options.remove_non_ascii && (c as u32) > 0x7F {
        if is_line_break(c) {
            return Classification::keep();
        }
        return Classification::drop(Category::NonAscii);
    }

    if options.remove_control_chars && c.is_control() {
        if is_line_break(c) || c == '\t' {
            return Classification::keep();
        }
        return Classification::drop(Category::Control);
    }

    if options.normalize_whitespace && c.is_whitespace() {
        if is_line_break(c) {
            return if options.preserve_newlines {
                Classification::keep()
            } else {
                Classification::drop(Category::WhitespaceCollapsed)
            };
        }
        if c != ' ' {
            return Classification {
                verdict: Verdict::Transform(' '),
                category: Category::WhitespaceCollapsed,
            };
        }
    }

    Classification::keep()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_off() -> CleaningOptions {
        CleaningOptions::default().passthrough()
    }

    #[test]
    fn test_everything_kept_when_disabled() {
        let options = all_off();
        for c in ['a', '\u{200B}', '\0', 'é', '\t', '\u{3000}'] {
            assert_eq!(classify(c, &options), Classification::keep());
        }
    }

    #[test]
    fn test_zero_width_wins_over_non_ascii() {
        let options = CleaningOptions::default();
        let result = classify('\u{200D}', &options);
        assert_eq!(result.verdict, Verdict::Drop);
        assert_eq!(result.category, Category::ZeroWidth);
    }

    #[test]
    fn test_zero_width_falls_through_to_non_ascii() {
        let options = CleaningOptions {
            remove_zero_width: false,
            ..CleaningOptions::default()
        };
        let result = classify('\u{200D}', &options);
        assert_eq!(result.category, Category::NonAscii);
        assert!(result.is_removal());
    }

    #[test]
    fn test_non_ascii_dropped() {
        let options = CleaningOptions::default();
        assert_eq!(
            classify('ü', &options),
            Classification::drop(Category::NonAscii)
        );
        assert_eq!(classify('u', &options), Classification::keep());
    }

    #[test]
    fn test_control_chars_except_line_breaks_and_tab() {
        let options = CleaningOptions::default();
        assert_eq!(
            classify('\x07', &options),
            Classification::drop(Category::Control)
        );
        assert_eq!(
            classify('\x7F', &options),
            Classification::drop(Category::Control)
        );
        assert_eq!(classify('\n', &options), Classification::keep());
        assert_eq!(classify('\r', &options), Classification::keep());
        assert_eq!(classify('\t', &options), Classification::keep());
    }

    #[test]
    fn test_c1_control_is_non_ascii_first() {
        let options = CleaningOptions::default();
        assert_eq!(classify('\u{0085}', &options).category, Category::NonAscii);

        let options = options.keep_non_ascii();
        assert_eq!(classify('\u{0085}', &options).category, Category::Control);
    }

    #[test]
    fn test_control_rule_shields_tab_from_normalization() {
        let options = CleaningOptions::default().with_normalized_whitespace();
        assert_eq!(classify('\t', &options), Classification::keep());
    }

    #[test]
    fn test_whitespace_normalization() {
        let options = all_off().with_normalized_whitespace();
        assert_eq!(
            classify('\t', &options),
            Classification {
                verdict: Verdict::Transform(' '),
                category: Category::WhitespaceCollapsed,
            }
        );
        assert_eq!(
            classify('\u{00A0}', &options).verdict,
            Verdict::Transform(' ')
        );
        assert_eq!(classify(' ', &options), Classification::keep());
        assert_eq!(classify('\n', &options), Classification::keep());
    }

    #[test]
    fn test_newlines_dropped_without_preserve() {
        let options = all_off().with_normalized_whitespace().without_newlines();
        let result = classify('\n', &options);
        assert_eq!(result.verdict, Verdict::Drop);
        assert_eq!(result.category, Category::WhitespaceCollapsed);
        assert!(!result.is_removal());
        assert_eq!(classify('\r', &options).verdict, Verdict::Drop);
    }

    #[test]
    fn test_line_breaks_survive_removal_rules() {
        let options = CleaningOptions::default().without_newlines();
        assert_eq!(classify('\n', &options).verdict, Verdict::Keep);
        assert_eq!(classify('\r', &options).verdict, Verdict::Keep);
    }
}
