//! Text Annotation WASM Module
//!
//! Lets a user mark non-overlapping labeled spans ("entities") in a block of
//! text by mouse selection, and search a concept tree by keyboard. Offsets are
//! UTF-16 code units into the original text, independent of how the DOM
//! currently splits it into nodes.

pub mod text;
pub mod renderers;
pub mod search;
pub mod models;
pub mod session;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use models::{AnnotateArgs, DisplayConfig, DisplayField, LoadError, SearchArgs};
pub use session::{AnnotatorSession, CommitSink, LatestValue, SearchSession};
pub use text::{Entity, EntitySet, SelectionError, SelectionInput, SourceText, TextRange};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        crate::wasm_warn!("logger already initialized");
    }

    log::info!("Annotation WASM module initialized");
}
