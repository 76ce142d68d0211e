//! Text model
//!
//! The immutable source text, the entity spans laid over it, and the
//! mapping from browser selections back into source offsets.
//!
//! ## Modules
//!
//! - `buffer`: Source text storage addressed by UTF-16 code units
//! - `cursor`: Half-open ranges over the source text
//! - `annotations`: Entity spans with the no-overlap invariant
//! - `selection`: Node-relative selection to absolute offset mapping

pub mod buffer;
pub mod cursor;
pub mod annotations;
pub mod selection;

// Re-exports for convenience
pub use buffer::SourceText;
pub use cursor::TextRange;
pub use annotations::{Entity, EntitySet, LabelSummary};
pub use selection::{map_selection, ChildNode, NodePoint, SelectionError, SelectionInput, SiblingNode};
