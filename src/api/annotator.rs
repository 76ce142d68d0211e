//! Annotator component API
//!
//! JavaScript owns the DOM; this class owns the annotation state. Every
//! mutating call returns either `null` (nothing changed) or a view update:
//! `{type: "rebuild", data: {nodes}}` or `{type: "patch", data: [ops]}`.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize, serialize_option, JsCommitSink};
use crate::models::AnnotateArgs;
use crate::session::AnnotatorSession;
use crate::text::{SelectionInput, TextRange};
use crate::{wasm_info, wasm_log};

/// One mounted annotator component
#[wasm_bindgen]
pub struct Annotator {
    session: AnnotatorSession,
    on_commit: Option<js_sys::Function>,
}

fn load_session(args: JsValue) -> Result<AnnotatorSession, JsValue> {
    let args: AnnotateArgs = deserialize(args, "Invalid annotator arguments")?;
    AnnotatorSession::load(args).map_err(|e| {
        crate::api::helpers::log_error(&e.to_string());
        JsValue::from_str(&e.to_string())
    })
}

#[wasm_bindgen]
impl Annotator {
    /// Create a session from the first render event
    #[wasm_bindgen(constructor)]
    pub fn new(args: JsValue) -> Result<Annotator, JsValue> {
        wasm_info!("Annotator created");
        Ok(Annotator {
            session: load_session(args)?,
            on_commit: None,
        })
    }

    /// Register the callback that receives committed values
    #[wasm_bindgen(js_name = onCommit)]
    pub fn on_commit(&mut self, callback: js_sys::Function) {
        self.on_commit = Some(callback);
    }

    /// Replace the session on a new render event; returns the display list
    pub fn load(&mut self, args: JsValue) -> Result<JsValue, JsValue> {
        self.session = load_session(args)?;
        self.display_list()
    }

    /// Current nodes with their ids
    #[wasm_bindgen(js_name = displayList)]
    pub fn display_list(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.display_list(), "Display list serialization error")
    }

    /// Handle mouse-up with a selection
    pub fn select(&mut self, input: JsValue) -> Result<JsValue, JsValue> {
        let input: SelectionInput = deserialize(input, "Invalid selection")?;
        wasm_log!("select: {:?} -> {:?}", input.anchor, input.focus);

        let mut sink = JsCommitSink::new(self.on_commit.as_ref());
        let update = self.session.select(&input, &mut sink);
        serialize_option(update.as_ref(), "View update serialization error")
    }

    /// Handle a click on an entity's remove control
    #[wasm_bindgen(js_name = removeEntity)]
    pub fn remove_entity(&mut self, start: usize, end: usize) -> Result<JsValue, JsValue> {
        wasm_log!("removeEntity: {}..{}", start, end);

        let mut sink = JsCommitSink::new(self.on_commit.as_ref());
        let update = self.session.remove(TextRange::new(start, end), &mut sink);
        serialize_option(update.as_ref(), "View update serialization error")
    }

    /// Handle a click on an entity's badge
    #[wasm_bindgen(js_name = toggleLabel)]
    pub fn toggle_label(&mut self, label: &str) -> Result<JsValue, JsValue> {
        wasm_log!("toggleLabel: {}", label);

        let mut sink = JsCommitSink::new(self.on_commit.as_ref());
        let update = self.session.toggle_label(label, &mut sink);
        serialize_option(update.as_ref(), "View update serialization error")
    }

    /// Entity covering a code unit offset, or `null`
    #[wasm_bindgen(js_name = entityAt)]
    pub fn entity_at(&self, offset: usize) -> Result<JsValue, JsValue> {
        serialize_option(self.session.entity_at(offset), "Entity serialization error")
    }

    /// Distinct labels with counts
    pub fn labels(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.labels(), "Label serialization error")
    }

    /// Current committed value
    pub fn value(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.value(), "Value serialization error")
    }
}
