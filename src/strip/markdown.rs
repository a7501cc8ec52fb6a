//! Markdown syntax removal.

use super::collapse_blank_lines;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[\w+\-.]*[ \t]*\r?\n(.*?)```").unwrap());

static RE_INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

static RE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}[ \t]+(.+)$").unwrap());

static RE_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^\n]+?)\*\*|__([^\n]+?)__").unwrap());

static RE_ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\s][^*\n]*?)\*").unwrap());

// Underscores inside words (snake_case) are left alone
static RE_ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^|[^\w])_([^_\s][^_\n]*?)_([^\w]|$)").unwrap());

static RE_STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~([^\n]+?)~~").unwrap());

static RE_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]+\)").unwrap());

static RE_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());

static RE_REF_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\[[^\]]*\]").unwrap());

// Removed lines keep a trailing `\r` so CRLF terminators stay whole
static RE_LINK_DEFINITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\[[^\]]+\]:[ \t]+[^\r\n]+(\r?)$").unwrap());

static RE_HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*_]{3,}[ \t]*(\r?)$").unwrap());

static RE_BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*>[ \t]?(.*)$").unwrap());

static RE_TASK_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]*\[[xX ]\][ \t]+(.+)$").unwrap());

static RE_BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+(.+)$").unwrap());

static RE_ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+(.+)$").unwrap());

static RE_HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Removes Markdown syntax, keeping the readable text.
///
/// # Example
///
/// ```
/// use cleanfile::strip::strip_markdown;
///
/// assert_eq!(strip_markdown("**bold** and *italic*"), "bold and italic");
/// ```
pub fn strip_markdown(input: &str) -> String {
    let text = RE_FENCED_CODE.replace_all(input, "$1");
    let text = RE_INLINE_CODE.replace_all(&text, "$1");
    let text = RE_HEADER.replace_all(&text, "$1");

    // Bold first: `**x**` would otherwise match the single-marker pattern
    let text = RE_BOLD.replace_all(&text, |caps: &Captures| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str())
            .to_string()
    });
    let text = RE_ITALIC_STAR.replace_all(&text, "$1");
    let text = RE_ITALIC_UNDERSCORE.replace_all(&text, "${1}${2}${3}");
    let text = RE_STRIKETHROUGH.replace_all(&text, "$1");

    // Images before links: `![alt](src)` contains a link
    let text = RE_IMAGE.replace_all(&text, "$1");
    let text = RE_LINK.replace_all(&text, "$1");
    let text = RE_REF_LINK.replace_all(&text, "$1");
    let text = RE_LINK_DEFINITION.replace_all(&text, "$1");

    let text = RE_HORIZONTAL_RULE.replace_all(&text, "$1");
    let text = RE_BLOCKQUOTE.replace_all(&text, "$1");

    // Task items before bullets: `- [ ] x` is also a bullet
    let text = RE_TASK_ITEM.replace_all(&text, "$1");
    let text = RE_BULLET_ITEM.replace_all(&text, "$1");
    let text = RE_ORDERED_ITEM.replace_all(&text, "$1");

    let text = text.replace('|', " ");
    let text = RE_HTML_COMMENT.replace_all(&text, "");

    log::debug!("stripped Markdown formatting");

    collapse_blank_lines(&text)
}
