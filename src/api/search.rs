//! Concept search component API

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize, serialize_option, JsCommitSink};
use crate::api::types::SearchListView;
use crate::models::SearchArgs;
use crate::search::Key;
use crate::session::SearchSession;
use crate::{wasm_info, wasm_log};

/// One mounted concept search component
#[wasm_bindgen]
pub struct ConceptSearchWidget {
    session: SearchSession,
    on_commit: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl ConceptSearchWidget {
    #[wasm_bindgen(constructor)]
    pub fn new(args: JsValue) -> Result<ConceptSearchWidget, JsValue> {
        wasm_info!("ConceptSearchWidget created");
        let args: SearchArgs = deserialize(args, "Invalid search arguments")?;
        Ok(ConceptSearchWidget {
            session: SearchSession::load(args),
            on_commit: None,
        })
    }

    /// Register the callback that receives committed values
    #[wasm_bindgen(js_name = onCommit)]
    pub fn on_commit(&mut self, callback: js_sys::Function) {
        self.on_commit = Some(callback);
    }

    /// Replace the concept forest on a new render event
    pub fn load(&mut self, args: JsValue) -> Result<(), JsValue> {
        let args: SearchArgs = deserialize(args, "Invalid search arguments")?;
        self.session = SearchSession::load(args);
        Ok(())
    }

    /// The query text changed; returns the list view
    pub fn input(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.session.type_query(text);
        self.list_view()
    }

    /// Input focused or clicked
    pub fn open(&mut self) {
        self.session.open();
    }

    /// Input lost focus
    pub fn blur(&mut self) {
        self.session.blur();
    }

    /// Pointer entered or left the result rows
    pub fn hover(&mut self, hovering: bool) {
        self.session.set_hovering(hovering);
    }

    /// Handle a keydown; returns true when the key was consumed
    pub fn keydown(&mut self, key: &str) -> bool {
        let Some(key) = Key::from_dom(key) else {
            return false;
        };
        wasm_log!("keydown: {:?}", key);

        let mut sink = JsCommitSink::new(self.on_commit.as_ref());
        self.session.key(key, &mut sink);
        true
    }

    /// Handle a click on a result row; returns the confirmed concept or `null`
    pub fn click(&mut self, index: usize) -> Result<JsValue, JsValue> {
        let mut sink = JsCommitSink::new(self.on_commit.as_ref());
        let confirmed = self.session.click(index, &mut sink);
        serialize_option(confirmed.as_ref(), "Concept serialization error")
    }

    /// Query, results and highlight for redrawing the dropdown
    #[wasm_bindgen(js_name = listView)]
    pub fn list_view(&self) -> Result<JsValue, JsValue> {
        let cursor = self.session.cursor();
        let view = SearchListView {
            search_text: cursor.search_text().to_string(),
            results: cursor.results().to_vec(),
            list: cursor.state(),
        };
        serialize(&view, "List view serialization error")
    }

    /// Current search value
    pub fn value(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.value(), "Value serialization error")
    }
}
