//! Line splitting and line-ending normalization.

use crate::options::LineEnding;
use std::borrow::Cow;

/// Detects the terminator at the end of `line`.
///
/// `\r\n` is checked before the bare forms since it ends with `\n`.
pub fn detect_line_ending(line: &str) -> Option<LineEnding> {
    if line.ends_with("\r\n") {
        Some(LineEnding::Windows)
    } else if line.ends_with('\n') {
        Some(LineEnding::Unix)
    } else if line.ends_with('\r') {
        Some(LineEnding::Mac9)
    } else {
        None
    }
}

/// Rewrites the terminator at the end of `line` to `target`.
///
/// Returns the line and whether a conversion happened. Lines without a
/// terminator and lines already ending in `target` are returned unchanged.
pub fn normalize_line_ending(line: &str, target: LineEnding) -> (Cow<'_, str>, bool) {
    match detect_line_ending(line) {
        Some(current) if current != target => {
            let body = &line[..line.len() - current.as_str().len()];
            let mut converted = String::with_capacity(body.len() + target.as_str().len());
            converted.push_str(body);
            converted.push_str(target.as_str());
            (Cow::Owned(converted), true)
        }
        _ => (Cow::Borrowed(line), false),
    }
}

/// Splits text into lines that keep their terminators.
///
/// A line ends after `\r\n`, a bare `\n` or a bare `\r`, so every line holds
/// at most one terminator, at its end. Empty input yields no lines and a
/// trailing terminator does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..=i]);
                start = i + 1;
            }
            b'\r' => {
                let end = if bytes.get(i + 1) == Some(&b'\n') {
                    i + 1
                } else {
                    i
                };
                lines.push(&text[start..=end]);
                start = end + 1;
                i = end;
            }
            _ => {}
        }
        i += 1;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_to_lf_converts() {
        let (line, converted) = normalize_line_ending("text\r\n", LineEnding::Unix);
        assert_eq!(line, "text\n");
        assert!(converted);
    }

    #[test]
    fn test_lf_to_lf_is_noop() {
        let (line, converted) = normalize_line_ending("text\n", LineEnding::Unix);
        assert_eq!(line, "text\n");
        assert!(!converted);
        assert!(matches!(line, Cow::Borrowed(_)));
    }

    #[test]
    fn test_lf_to_crlf_and_cr() {
        assert_eq!(
            normalize_line_ending("a\n", LineEnding::Windows),
            (Cow::Borrowed("a\r\n"), true)
        );
        assert_eq!(
            normalize_line_ending("a\n", LineEnding::Mac9),
            (Cow::Borrowed("a\r"), true)
        );
        assert_eq!(
            normalize_line_ending("a\r", LineEnding::Windows),
            (Cow::Borrowed("a\r\n"), true)
        );
    }

    #[test]
    fn test_crlf_not_mistaken_for_cr() {
        let (line, converted) = normalize_line_ending("a\r\n", LineEnding::Windows);
        assert_eq!(line, "a\r\n");
        assert!(!converted);
    }

    #[test]
    fn test_unterminated_line_untouched() {
        let (line, converted) = normalize_line_ending("last line", LineEnding::Windows);
        assert_eq!(line, "last line");
        assert!(!converted);

        let (line, converted) = normalize_line_ending("", LineEnding::Windows);
        assert_eq!(line, "");
        assert!(!converted);
    }

    #[test]
    fn test_split_mixed_terminators() {
        let lines = split_lines("one\r\ntwo\nthree\rfour");
        assert_eq!(lines, vec!["one\r\n", "two\n", "three\r", "four"]);
    }

    #[test]
    fn test_split_trailing_terminator() {
        assert_eq!(split_lines("a\nb\n"), vec!["a\n", "b\n"]);
        assert_eq!(split_lines("\n\n"), vec!["\n", "\n"]);
        assert_eq!(split_lines("\r\r\n"), vec!["\r", "\r\n"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_keeps_multibyte_text() {
        let text = "héllo\r\nwörld";
        assert_eq!(split_lines(text).concat(), text);
    }
}
