//! HTML tag removal.

use super::{collapse_blank_lines, decode_entities};
use regex::Regex;
use std::sync::LazyLock;

static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static RE_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script\s*>").unwrap());

static RE_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style\s*>").unwrap());

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static RE_HORIZONTAL_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// Text left after stripping HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlStripped {
    pub text: String,
    /// Entity references decoded along the way.
    pub entities_decoded: usize,
}

/// Strips tags, comments, scripts and styles, then decodes entities.
///
/// # Example
///
/// ```
/// use cleanfile::strip::strip_html;
///
/// let stripped = strip_html("<p>A &amp; B</p>");
/// assert_eq!(stripped.text, "A & B");
/// assert_eq!(stripped.entities_decoded, 1);
/// ```
pub fn strip_html(input: &str) -> HtmlStripped {
    let text = RE_COMMENT.replace_all(input, "");
    let text = RE_SCRIPT.replace_all(&text, "");
    let text = RE_STYLE.replace_all(&text, "");
    let text = RE_TAG.replace_all(&text, "");

    let (text, entities_decoded) = decode_entities(&text);

    let text = RE_HORIZONTAL_SPACE.replace_all(&text, " ");
    let text = collapse_blank_lines(&text);

    log::debug!("stripped HTML, {} entities decoded", entities_decoded);

    HtmlStripped {
        text,
        entities_decoded,
    }
}
