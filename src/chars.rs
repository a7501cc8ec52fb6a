//! Character tables: the zero-width set and human-readable descriptions.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Byte order mark / zero width no-break space.
pub const BOM: char = '\u{FEFF}';

/// Invisible code points removed by zero-width cleaning.
pub const ZERO_WIDTH_CHARS: [char; 22] = [
    '\u{200B}', '\u{200C}', '\u{200D}', '\u{200E}', '\u{200F}', '\u{FEFF}', '\u{202A}',
    '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}', '\u{2060}', '\u{2061}', '\u{2062}',
    '\u{2063}', '\u{2064}', '\u{206A}', '\u{206B}', '\u{206C}', '\u{206D}', '\u{206E}',
    '\u{206F}',
];

static ZERO_WIDTH_SET: LazyLock<HashSet<char>> =
    LazyLock::new(|| ZERO_WIDTH_CHARS.iter().copied().collect());

/// Known names for characters that commonly show up in removal reports.
const CHAR_DESCRIPTIONS: &[(char, &str)] = &[
    ('\u{200B}', "Zero Width Space"),
    ('\u{200C}', "Zero Width Non-Joiner"),
    ('\u{200D}', "Zero Width Joiner"),
    ('\u{200E}', "Left-to-Right Mark"),
    ('\u{200F}', "Right-to-Left Mark"),
    ('\u{FEFF}', "BOM/Zero Width No-Break Space"),
    ('\u{202A}', "Left-to-Right Embedding"),
    ('\u{202B}', "Right-to-Left Embedding"),
    ('\u{202C}', "Pop Directional Formatting"),
    ('\u{202D}', "Left-to-Right Override"),
    ('\u{202E}', "Right-to-Left Override"),
    ('\u{2060}', "Word Joiner"),
    ('\u{2061}', "Function Application"),
    ('\u{2062}', "Invisible Times"),
    ('\u{2063}', "Invisible Separator"),
    ('\u{2064}', "Invisible Plus"),
    ('\u{0000}', "NULL character"),
    ('\u{0001}', "Start of Heading"),
    ('\u{0002}', "Start of Text"),
    ('\u{0003}', "End of Text"),
    ('\u{0004}', "End of Transmission"),
    ('\u{0005}', "Enquiry"),
    ('\u{0006}', "Acknowledge"),
    ('\u{0007}', "Bell"),
    ('\u{0008}', "Backspace"),
    ('\u{000B}', "Vertical Tab"),
    ('\u{000C}', "Form Feed"),
    ('\u{000E}', "Shift Out"),
    ('\u{000F}', "Shift In"),
    ('\r', "Carriage Return (CR)"),
    ('\n', "Line Feed (LF)"),
];

/// Returns true if `c` is in the zero-width set.
pub fn is_zero_width(c: char) -> bool {
    ZERO_WIDTH_SET.contains(&c)
}

/// Describes a character for reports.
///
/// Falls back to a generic description built from the code point when the
/// character has no known name.
pub fn describe_char(c: char) -> String {
    if let Some((_, name)) = CHAR_DESCRIPTIONS.iter().find(|(known, _)| *known == c) {
        return (*name).to_string();
    }

    if c.is_control() {
        format!("Control character (U+{:04X})", c as u32)
    } else if is_printable(c) {
        format!("Character '{}'", c)
    } else {
        format!("Non-printable (U+{:04X})", c as u32)
    }
}

/// Rough printability check: visible glyphs and the plain space.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !c.is_whitespace() && !is_zero_width(c) && !is_private_use(c) && !is_noncharacter(c)
}

fn is_private_use(c: char) -> bool {
    let code = c as u32;
    (0xE000..=0xF8FF).contains(&code)
        || (0xF0000..=0xFFFFD).contains(&code)
        || (0x100000..=0x10FFFD).contains(&code)
}

fn is_noncharacter(c: char) -> bool {
    let code = c as u32;
    (0xFDD0..=0xFDEF).contains(&code) || (code & 0xFFFE) == 0xFFFE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_set_size() {
        let unique: HashSet<char> = ZERO_WIDTH_CHARS.iter().copied().collect();
        assert_eq!(unique.len(), 22);
    }

    #[test]
    fn test_zero_width_membership() {
        assert!(is_zero_width('\u{200B}'));
        assert!(is_zero_width(BOM));
        assert!(is_zero_width('\u{206F}'));
        assert!(!is_zero_width('\u{2065}'));
        assert!(!is_zero_width('a'));
        assert!(!is_zero_width(' '));
    }

    #[test]
    fn test_describe_known_chars() {
        assert_eq!(describe_char('\u{200B}'), "Zero Width Space");
        assert_eq!(describe_char('\0'), "NULL character");
        assert_eq!(describe_char('\n'), "Line Feed (LF)");
    }

    #[test]
    fn test_describe_fallbacks() {
        assert_eq!(describe_char('é'), "Character 'é'");
        assert_eq!(describe_char('\u{0085}'), "Control character (U+0085)");
        assert_eq!(describe_char('\u{00A0}'), "Non-printable (U+00A0)");
        assert_eq!(describe_char('\u{E000}'), "Non-printable (U+E000)");
    }
}
