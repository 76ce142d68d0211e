//! Component sessions
//!
//! One session per mounted component instance, rebuilt on every host render
//! event. Sessions own all mutable state; nothing is process-wide.

pub mod host;
pub mod annotator;
pub mod search;

pub use host::{CommitSink, LatestValue};
pub use annotator::AnnotatorSession;
pub use search::SearchSession;
