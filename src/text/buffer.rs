//! Source text storage
//!
//! The immutable string every offset in the annotator refers to.

use super::cursor::TextRange;
use crate::utils::utf16;

/// Immutable source text addressed by UTF-16 code unit offsets
///
/// Keeps the original string for cheap full reads and the encoded code units
/// for offset arithmetic. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    text: String,
    units: Vec<u16>,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let units = utf16::encode(&text);
        Self { text, units }
    }

    /// The full text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in code units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Code units of a range, clamped to the text
    pub fn units(&self, range: TextRange) -> &[u16] {
        let end = range.end.min(self.units.len());
        let start = range.start.min(end);
        &self.units[start..end]
    }

    /// Text of a range, clamped to the text
    pub fn slice(&self, range: TextRange) -> String {
        utf16::decode(self.units(range))
    }

    /// Whether a range lies inside the text and is non-empty
    pub fn is_valid_range(&self, range: TextRange) -> bool {
        range.start < range.end && range.end <= self.units.len()
    }

    /// Shrink a range so it starts and ends on non-whitespace
    ///
    /// Returns `None` for empty or whitespace-only ranges.
    pub fn trim_range(&self, range: TextRange) -> Option<TextRange> {
        let (leading, trailing) = utf16::whitespace_margins(self.units(range))?;
        Some(range.shrink(leading, trailing))
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
