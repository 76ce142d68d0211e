//! Browser tests for the JS-facing classes
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use annotate_wasm::api::{Annotator, ConceptSearchWidget};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn to_js(value: serde_json::Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

fn from_js(value: JsValue) -> serde_json::Value {
    serde_wasm_bindgen::from_value(value).unwrap()
}

#[wasm_bindgen_test]
fn test_annotator_select_and_remove() {
    let mut annotator = Annotator::new(to_js(serde_json::json!({
        "label": "C1",
        "text": "The patient has diabetes",
        "entities": []
    })))
    .unwrap();

    let update = annotator
        .select(to_js(serde_json::json!({
            "anchor": {"node": 0, "offset": 16},
            "focus": {"node": 0, "offset": 24},
            "siblings": [{"kind": "text", "len": 24}]
        })))
        .unwrap();
    assert_eq!(from_js(update)["type"], "rebuild");

    let value = from_js(annotator.value().unwrap());
    assert_eq!(value[0]["start"], 16);

    let patch = from_js(annotator.remove_entity(16, 24).unwrap());
    assert_eq!(patch["type"], "patch");
    assert!(annotator.remove_entity(16, 24).unwrap().is_null());
}

#[wasm_bindgen_test]
fn test_annotator_rejects_bad_payload() {
    assert!(Annotator::new(to_js(serde_json::json!({"label": "C1"}))).is_err());
    assert!(Annotator::new(to_js(serde_json::json!({
        "label": "C1",
        "text": "short",
        "entities": [{"start": 0, "end": 40, "label": "C1"}]
    })))
    .is_err());
}

#[wasm_bindgen_test]
fn test_search_widget_keyboard() {
    let mut widget = ConceptSearchWidget::new(to_js(serde_json::json!({
        "concepts": [
            {"code": "A1", "label": "Flu"},
            {"code": "A2", "label": "Cold", "children": [{"code": "A2.1", "label": "Coldsore"}]}
        ]
    })))
    .unwrap();

    let view = from_js(widget.input("Co").unwrap());
    assert_eq!(view["results"].as_array().unwrap().len(), 2);

    assert!(widget.keydown("ArrowDown"));
    assert!(widget.keydown("Enter"));
    assert!(!widget.keydown("a"));

    let value = from_js(widget.value().unwrap());
    assert_eq!(value["selected"]["code"], "A2");
}
