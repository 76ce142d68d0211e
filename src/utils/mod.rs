//! Utility modules for the annotator
//!
//! Helpers shared by the text model, the selection mapper and the renderers.

pub mod utf16;
