//! Shared types for the WASM API
//!
//! Result shapes returned to JavaScript that have no counterpart in the
//! session layer.

use crate::search::{ConceptRef, ListState};

/// Snapshot of the search list for redrawing the dropdown
#[derive(serde::Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchListView {
    pub search_text: String,
    pub results: Vec<ConceptRef>,
    pub list: ListState,
}
