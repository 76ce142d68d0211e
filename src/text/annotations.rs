//! Entity layer over the source text
//!
//! Stores labeled spans separately from the text, linked by code unit
//! offsets. The set stays sorted by start and no two spans ever share a
//! code unit.

use super::cursor::TextRange;
use serde::{Deserialize, Serialize};

/// A labeled span over the source text
///
/// Serializes to the record committed to the host; `details` is omitted
/// when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub start: usize,
    pub end: usize,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default)]
    pub selected: bool,
}

impl Entity {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            details: None,
            selected: false,
        }
    }

    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = details;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Get the range covered by this entity
    pub fn range(&self) -> TextRange {
        TextRange::new(self.start, self.end)
    }
}

/// Label with the number of entities carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSummary {
    pub label: String,
    pub count: usize,
    pub selected: bool,
}

/// Ordered, non-overlapping entities over a text of known length
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntitySet {
    text_len: usize,
    entities: Vec<Entity>,
}

impl EntitySet {
    /// Create an empty set for a text of `text_len` code units
    pub fn new(text_len: usize) -> Self {
        Self {
            text_len,
            entities: Vec::new(),
        }
    }

    /// Insert an entity unless it is out of bounds, empty, or overlaps an existing one
    ///
    /// Returns false and leaves the set untouched on rejection.
    pub fn try_insert(&mut self, entity: Entity) -> bool {
        let range = entity.range();
        if range.is_empty() || range.end > self.text_len {
            log::debug!("rejected entity {}..{}: out of bounds", range.start, range.end);
            return false;
        }

        if let Some(existing) = self.entities.iter().find(|e| e.range().overlaps(&range)) {
            log::debug!(
                "rejected entity {}..{}: overlaps {}..{}",
                range.start,
                range.end,
                existing.start,
                existing.end
            );
            return false;
        }

        let at = self.entities.partition_point(|e| e.start < entity.start);
        self.entities.insert(at, entity);
        true
    }

    /// Remove the entity with exactly these boundaries
    pub fn remove(&mut self, range: TextRange) -> bool {
        match self.position(range) {
            Some(index) => {
                self.entities.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flip `selected` on every entity with this label
    ///
    /// Returns the ranges of the entities that changed.
    pub fn toggle_selected_by_label(&mut self, label: &str) -> Vec<TextRange> {
        self.entities
            .iter_mut()
            .filter(|e| e.label == label)
            .map(|e| {
                e.selected = !e.selected;
                e.range()
            })
            .collect()
    }

    /// Records for the host, in sorted order
    pub fn serialize(&self) -> Vec<Entity> {
        self.entities.clone()
    }

    /// Get the entity with exactly these boundaries
    pub fn get(&self, range: TextRange) -> Option<&Entity> {
        self.position(range).map(|i| &self.entities[i])
    }

    /// Get the entity covering an offset
    pub fn entity_at(&self, offset: usize) -> Option<&Entity> {
        let i = self.entities.partition_point(|e| e.end <= offset);
        let hit = TextRange::single_unit(offset);
        self.entities.get(i).filter(|e| e.range().overlaps(&hit))
    }

    /// Distinct labels in first-appearance order
    ///
    /// A label counts as selected when every entity carrying it is.
    pub fn labels(&self) -> Vec<LabelSummary> {
        let mut summaries: Vec<LabelSummary> = Vec::new();
        for entity in &self.entities {
            match summaries.iter_mut().find(|s| s.label == entity.label) {
                Some(summary) => {
                    summary.count += 1;
                    summary.selected &= entity.selected;
                }
                None => summaries.push(LabelSummary {
                    label: entity.label.clone(),
                    count: 1,
                    selected: entity.selected,
                }),
            }
        }
        summaries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn as_slice(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn text_len(&self) -> usize {
        self.text_len
    }

    fn position(&self, range: TextRange) -> Option<usize> {
        self.entities
            .binary_search_by_key(&range.start, |e| e.start)
            .ok()
            .filter(|&i| self.entities[i].end == range.end)
    }
}
