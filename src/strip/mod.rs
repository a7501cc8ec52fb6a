//! Pattern-based markup removal.
//!
//! These transforms are heuristics, not parsers: they assume the content has
//! already been detected as the matching format.

mod entities;
mod html;
mod markdown;

pub use entities::{decode_entities, lookup_named_entity};
pub use html::{strip_html, HtmlStripped};
pub use markdown::strip_markdown;

use regex::Regex;
use std::sync::LazyLock;

/// Three or more line breaks in a row, optionally CRLF.
static RE_EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\r?\n)(?:\r?\n){2,}").unwrap());

/// Collapses runs of three or more line breaks to a single blank line.
///
/// The first terminator of the run decides the style of the kept pair.
fn collapse_blank_lines(text: &str) -> String {
    RE_EXCESS_NEWLINES.replace_all(text, "$1$1").into_owned()
}
