//! Keyboard-driven result list state
//!
//! Tracks the query, its bounded result list, which row is highlighted,
//! and the concept the user last confirmed.

use serde::{Deserialize, Serialize};

use super::concept::{ConceptNode, ConceptRef};
use super::matcher::find_matches;

/// Result list visibility and highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ListState {
    #[default]
    Closed,
    Open { highlighted: Option<usize> },
}

impl ListState {
    pub fn is_open(&self) -> bool {
        matches!(self, ListState::Open { .. })
    }

    pub fn highlighted(&self) -> Option<usize> {
        match self {
            ListState::Open { highlighted } => *highlighted,
            ListState::Closed => None,
        }
    }
}

/// Navigation keys the list reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    #[serde(rename = "ArrowDown")]
    Down,
    #[serde(rename = "ArrowUp")]
    Up,
    Enter,
    Escape,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "Down" => Some(Key::Down),
            "ArrowUp" | "Up" => Some(Key::Up),
            "Enter" => Some(Key::Enter),
            "Escape" | "Esc" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Result list limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub min_query_len: usize,
    pub max_results: usize,
    pub include_metadata: bool,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            max_results: 10,
            include_metadata: false,
        }
    }
}

/// Value committed to the host when a concept is confirmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchValue {
    pub search_text: String,
    pub search_terms: Vec<String>,
    pub results: Vec<ConceptRef>,
    pub selected: Option<ConceptRef>,
}

/// Transient search UI state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCursor {
    search_text: String,
    results: Vec<ConceptRef>,
    state: ListState,
    hovering: bool,
    selected: Option<ConceptRef>,
}

impl SearchCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query and recompute the results
    ///
    /// Queries shorter than the minimum clear the results instead of matching
    /// everything. The list opens with nothing highlighted.
    pub fn set_query(&mut self, text: &str, forest: &[ConceptNode], limits: SearchLimits) {
        self.search_text = text.to_string();
        self.results = if crate::utils::utf16::len(text) < limits.min_query_len {
            Vec::new()
        } else {
            find_matches(text, forest)
                .take(limits.max_results)
                .map(|node| ConceptRef::from_node(node, limits.include_metadata))
                .collect()
        };
        log::debug!("query {:?} -> {} results", text, self.results.len());
        self.state = ListState::Open { highlighted: None };
    }

    /// Open the list on focus or click
    pub fn open(&mut self) {
        if !self.state.is_open() {
            self.state = ListState::Open { highlighted: None };
        }
    }

    /// Close without selecting
    pub fn close(&mut self) {
        self.state = ListState::Closed;
        self.hovering = false;
    }

    /// Track whether the pointer is over a result row
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Focus left the input; stays open while a result row is hovered
    pub fn blur(&mut self) {
        if !self.hovering {
            self.close();
        }
    }

    /// Apply a navigation key; returns the concept confirmed by Enter
    pub fn key(&mut self, key: Key) -> Option<ConceptRef> {
        let ListState::Open { highlighted } = self.state else {
            return None;
        };

        match key {
            Key::Down => {
                let next = highlighted.map_or(0, |i| i + 1);
                if next < self.results.len() {
                    self.state = ListState::Open { highlighted: Some(next) };
                }
                None
            }
            Key::Up => {
                if let Some(i) = highlighted.filter(|&i| i > 0) {
                    self.state = ListState::Open { highlighted: Some(i - 1) };
                }
                None
            }
            Key::Enter => highlighted.and_then(|i| self.confirm(i)),
            Key::Escape => {
                self.close();
                None
            }
        }
    }

    /// Confirm a result row directly (mouse click)
    pub fn confirm(&mut self, index: usize) -> Option<ConceptRef> {
        let concept = self.results.get(index)?.clone();
        self.selected = Some(concept.clone());
        self.close();
        Some(concept)
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn results(&self) -> &[ConceptRef] {
        &self.results
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    pub fn selected(&self) -> Option<&ConceptRef> {
        self.selected.as_ref()
    }

    /// Whitespace-separated terms of the query
    pub fn search_terms(&self) -> Vec<String> {
        self.search_text
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn value(&self) -> SearchValue {
        SearchValue {
            search_text: self.search_text.clone(),
            search_terms: self.search_terms(),
            results: self.results.clone(),
            selected: self.selected.clone(),
        }
    }
}
