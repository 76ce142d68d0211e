//! Annotator WASM API
//!
//! This module provides the JavaScript-facing classes for the two components.
//! JavaScript forwards DOM events and host render events; the classes return
//! display lists and DOM patches and push committed values through a callback.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging, serialization, and the JS commit channel
//! - `types`: Result shapes that only exist at the JS boundary
//! - `annotator`: The `Annotator` class
//! - `search`: The `ConceptSearchWidget` class

pub mod helpers;
pub mod types;
pub mod annotator;
pub mod search;

pub use annotator::Annotator;
pub use search::ConceptSearchWidget;
