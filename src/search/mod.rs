//! Concept search
//!
//! Depth-first matching over a concept forest and the keyboard-driven
//! result list built on top of it.

pub mod concept;
pub mod matcher;
pub mod cursor;

pub use concept::{ConceptNode, ConceptRef};
pub use matcher::{find_matches, Matches};
pub use cursor::{Key, ListState, SearchCursor, SearchLimits, SearchValue};
