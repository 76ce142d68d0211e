//! Models module
//!
//! Host payloads delivered on each render event and the configuration
//! derived from them.

pub mod config;

// Re-export commonly used types
pub use config::*;
