//! Decoding raw input into text.

use crate::error::Result;
use std::path::Path;

/// Decodes raw bytes as text.
///
/// Input must be valid UTF-8. With the `utf16` feature, input starting with
/// a UTF-16 byte order mark is decoded as UTF-16 instead.
pub fn decode_bytes(data: &[u8]) -> Result<String> {
    #[cfg(feature = "utf16")]
    if let Some(text) = decode_utf16(data)? {
        return Ok(text);
    }

    let text = std::str::from_utf8(data)?;
    Ok(text.to_string())
}

/// Reads a file and decodes it as text.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let data = std::fs::read(path)?;
    decode_bytes(&data)
}

#[cfg(feature = "utf16")]
fn decode_utf16(data: &[u8]) -> Result<Option<String>> {
    let (encoding, body) = match data {
        [0xFF, 0xFE, rest @ ..] => (encoding_rs::UTF_16LE, rest),
        [0xFE, 0xFF, rest @ ..] => (encoding_rs::UTF_16BE, rest),
        _ => return Ok(None),
    };

    let decoded = encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| {
            crate::error::Error::Encoding(format!("invalid {} input", encoding.name()))
        })?;

    // Keep the mark so BOM removal sees and counts it
    let mut text = String::with_capacity(decoded.len() + 3);
    text.push(crate::chars::BOM);
    text.push_str(&decoded);
    Ok(Some(text))
}
