//! Shared helpers for WASM API operations
//!
//! Console logging, JS value marshalling, and the JS commit callback used by
//! every exported component class.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::session::CommitSink;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to a plain JS object with automatic error handling
///
/// Maps become plain objects and `None` becomes `null`, matching what the
/// host expects from JSON.
pub fn serialize<T: Serialize + ?Sized>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize an optional value, mapping `None` to `null`
pub fn serialize_option<T: Serialize>(value: Option<&T>, error_context: &str) -> Result<JsValue, JsValue> {
    match value {
        Some(v) => serialize(v, error_context),
        None => Ok(JsValue::NULL),
    }
}

// ============================================================================
// Commit Channel
// ============================================================================

/// Forwards committed values to a JS callback
///
/// Without a registered callback commits are dropped. Failures are logged;
/// the host is never told about them.
pub struct JsCommitSink<'a> {
    callback: Option<&'a js_sys::Function>,
}

impl<'a> JsCommitSink<'a> {
    pub fn new(callback: Option<&'a js_sys::Function>) -> Self {
        Self { callback }
    }
}

impl<'a, T: Serialize + ?Sized> CommitSink<T> for JsCommitSink<'a> {
    fn commit(&mut self, value: &T) {
        let Some(callback) = self.callback else {
            wasm_warn!("commit dropped: no handler registered");
            return;
        };
        let Ok(js_value) = serialize(value, "Commit serialization error") else {
            return;
        };
        if let Err(e) = callback.call1(&JsValue::NULL, &js_value) {
            wasm_error!("commit handler threw: {:?}", e);
        }
    }
}
