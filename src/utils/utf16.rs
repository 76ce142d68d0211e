//! UTF-16 code unit helpers
//!
//! Browser selections and host payloads count offsets in UTF-16 code units,
//! so every coordinate in this crate does too. These helpers bridge Rust
//! strings to that coordinate space.

/// Encode a string into UTF-16 code units
pub fn encode(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Length of a string in UTF-16 code units
pub fn len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Decode a run of code units back into a `String`
///
/// A range that splits a surrogate pair decodes the lone half as U+FFFD.
pub fn decode(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}

/// Count leading and trailing whitespace code units
///
/// Returns `None` when the run is empty or whitespace only, otherwise
/// `(leading, trailing)` measured in code units.
pub fn whitespace_margins(units: &[u16]) -> Option<(usize, usize)> {
    let mut leading = 0;
    let mut seen_content = false;
    for ch in char::decode_utf16(units.iter().copied()) {
        match ch {
            Ok(c) if c.is_whitespace() => leading += c.len_utf16(),
            _ => {
                seen_content = true;
                break;
            }
        }
    }
    if !seen_content {
        return None;
    }

    let mut trailing = 0;
    for ch in char::decode_utf16(units.iter().rev().copied()) {
        // Reversed decoding sees surrogate pairs backwards, which only ever
        // yields errors; those are content, so stopping there is correct.
        match ch {
            Ok(c) if c.is_whitespace() => trailing += c.len_utf16(),
            _ => break,
        }
    }

    Some((leading, trailing))
}
