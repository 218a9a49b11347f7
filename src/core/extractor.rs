use anyhow::{Context, Result};

use crate::core::font::{GLYPH_COUNT, GLYPH_HEIGHT};

/// Marker keyword that introduces the byte list in a .coe file.
const VECTOR_MARKER: &str = "memory_initialization_vector";

/// Extract the flat byte sequence from .coe source text.
///
/// The vector section looks like
/// `memory_initialization_vector = 00,7E,81,...,00;` with the values as bare
/// hex numerals. Whitespace is tolerated around `=`, between tokens and across
/// newlines; trailing commas are ignored.
pub fn extract(source: &str) -> Result<Vec<u8>> {
    let section = vector_section(source).with_context(|| {
        format!("Could not find {} section in source", VECTOR_MARKER)
    })?;

    let mut bytes = Vec::new();
    for token in section.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value = u8::from_str_radix(token, 16)
            .with_context(|| format!("Invalid hex byte {:?} in vector section", token))?;
        bytes.push(value);
    }

    let required = GLYPH_COUNT * GLYPH_HEIGHT;
    if bytes.len() < required {
        anyhow::bail!("Not enough font data: got {} bytes, need {}", bytes.len(), required);
    }

    Ok(bytes)
}

// Returns the text between `memory_initialization_vector =` and the
// terminating semicolon, or None if the section is missing or unterminated.
fn vector_section(source: &str) -> Option<&str> {
    let start = source.find(VECTOR_MARKER)? + VECTOR_MARKER.len();
    let rest = source[start..].trim_start();
    let rest = rest.strip_prefix('=')?;
    let end = rest.find(';')?;
    Some(&rest[..end])
}
