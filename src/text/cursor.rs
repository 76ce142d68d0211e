//! Offsets and ranges over the source text
//!
//! All positions are UTF-16 code unit offsets into the source text.

use serde::{Deserialize, Serialize};

/// A range of text from start (inclusive) to end (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a range covering a single code unit
    pub fn single_unit(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos.saturating_add(1),
        }
    }

    /// Check if this range is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length in code units
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if a position is contained within this range
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Half-open overlap test; ranges that only touch do not overlap
    pub fn overlaps(&self, other: &TextRange) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }

    /// Shrink the range by `leading` units at the front and `trailing` at the back
    pub fn shrink(&self, leading: usize, trailing: usize) -> Self {
        Self {
            start: self.start + leading,
            end: self.end.saturating_sub(trailing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_range_contains() {
        let range = TextRange::new(2, 5);

        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5)); // Exclusive end
        assert!(!range.contains(1));
    }

    #[test]
    fn test_touching_ranges_do_not_overlap() {
        let a = TextRange::new(0, 4);
        let b = TextRange::new(4, 9);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = TextRange::new(3, 8);
        let b = TextRange::new(7, 12);
        let inner = TextRange::new(4, 5);
        assert!(a.overlaps(&b) && b.overlaps(&a));
        assert!(a.overlaps(&inner) && inner.overlaps(&a));
        assert!(!TextRange::new(0, 2).overlaps(&TextRange::new(5, 6)));
    }

    #[test]
    fn test_single_unit_and_len() {
        let r = TextRange::single_unit(7);
        assert_eq!(r.len(), 1);
        assert!(!r.is_empty());
        assert!(TextRange::new(3, 3).is_empty());
    }
}
