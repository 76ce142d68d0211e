//! Concept search session
//!
//! Holds the concept forest delivered by the host and the result list
//! state. Confirming a concept commits the search value.

use super::host::CommitSink;
use crate::models::SearchArgs;
use crate::search::{ConceptNode, ConceptRef, Key, SearchCursor, SearchLimits, SearchValue};

#[derive(Debug, Clone)]
pub struct SearchSession {
    forest: Vec<ConceptNode>,
    limits: SearchLimits,
    cursor: SearchCursor,
}

impl SearchSession {
    pub fn load(args: SearchArgs) -> Self {
        log::info!("concept search loaded: {} top-level concepts", args.concepts.len());
        Self {
            forest: args.concepts,
            limits: SearchLimits {
                min_query_len: args.min_query_len,
                max_results: args.max_results,
                include_metadata: args.show_metadata,
            },
            cursor: SearchCursor::new(),
        }
    }

    /// The query changed; recompute results
    pub fn type_query(&mut self, text: &str) -> &[ConceptRef] {
        self.cursor.set_query(text, &self.forest, self.limits);
        self.cursor.results()
    }

    pub fn open(&mut self) {
        self.cursor.open();
    }

    pub fn blur(&mut self) {
        self.cursor.blur();
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.cursor.set_hovering(hovering);
    }

    /// Apply a navigation key; commits when Enter confirms a concept
    pub fn key(&mut self, key: Key, sink: &mut impl CommitSink<SearchValue>) -> Option<ConceptRef> {
        let confirmed = self.cursor.key(key)?;
        sink.commit(&self.cursor.value());
        Some(confirmed)
    }

    /// Confirm a result row by index (mouse click)
    pub fn click(&mut self, index: usize, sink: &mut impl CommitSink<SearchValue>) -> Option<ConceptRef> {
        let confirmed = self.cursor.confirm(index)?;
        sink.commit(&self.cursor.value());
        Some(confirmed)
    }

    pub fn value(&self) -> SearchValue {
        self.cursor.value()
    }

    pub fn cursor(&self) -> &SearchCursor {
        &self.cursor
    }
}
