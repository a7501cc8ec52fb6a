//! HTML entity decoding.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Named entities understood by the decoder.
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("amp", "&"),
    ("lt", "<"),
    ("gt", ">"),
    ("quot", "\""),
    ("apos", "'"),
    ("nbsp", " "),
    ("copy", "\u{00A9}"),
    ("reg", "\u{00AE}"),
    ("trade", "\u{2122}"),
    ("euro", "\u{20AC}"),
    ("pound", "\u{00A3}"),
    ("yen", "\u{00A5}"),
    ("cent", "\u{00A2}"),
    ("sect", "\u{00A7}"),
    ("para", "\u{00B6}"),
    ("middot", "\u{00B7}"),
    ("bull", "\u{2022}"),
    ("hellip", "\u{2026}"),
    ("ndash", "\u{2013}"),
    ("mdash", "\u{2014}"),
    ("lsquo", "\u{2018}"),
    ("rsquo", "\u{2019}"),
    ("ldquo", "\u{201C}"),
    ("rdquo", "\u{201D}"),
    ("times", "\u{00D7}"),
    ("divide", "\u{00F7}"),
    ("deg", "\u{00B0}"),
    ("plusmn", "\u{00B1}"),
    ("frac14", "\u{00BC}"),
    ("frac12", "\u{00BD}"),
    ("frac34", "\u{00BE}"),
];

static ENTITY_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NAMED_ENTITIES.iter().copied().collect());

/// Any entity reference: decimal, hexadecimal or named.
static RE_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#([0-9]+)|#[xX]([0-9a-fA-F]+)|([a-zA-Z][a-zA-Z0-9]*));").unwrap()
});

/// Looks up a named entity by name, without the `&` and `;`.
pub fn lookup_named_entity(name: &str) -> Option<&'static str> {
    ENTITY_TABLE.get(name).copied()
}

/// Decodes entity references in a single pass.
///
/// Returns the decoded text and the number of references decoded. Decoded
/// output is never decoded again, so `&amp;lt;` becomes `&lt;`. Unknown
/// names and numeric references outside the Unicode scalar range are left
/// as written.
pub fn decode_entities(text: &str) -> (String, usize) {
    let mut decoded = 0;

    let result = RE_ENTITY.replace_all(text, |caps: &Captures| {
        let replacement = if let Some(digits) = caps.get(1) {
            digits.as_str().parse::<u32>().ok().and_then(scalar)
        } else if let Some(hex) = caps.get(2) {
            u32::from_str_radix(hex.as_str(), 16).ok().and_then(scalar)
        } else {
            caps.get(3)
                .and_then(|name| lookup_named_entity(name.as_str()))
                .map(str::to_string)
        };

        match replacement {
            Some(value) => {
                decoded += 1;
                value
            }
            None => caps[0].to_string(),
        }
    });

    (result.into_owned(), decoded)
}

/// Converts a code point in `(0, 0x10FFFF]` to a string.
fn scalar(code: u32) -> Option<String> {
    if code == 0 {
        return None;
    }
    char::from_u32(code).map(String::from)
}
