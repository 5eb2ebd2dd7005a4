//! Browser tests for the JS-facing entry points
//!
//! Run with `wasm-pack test --headless --firefox wasm`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use fridge_wasm::{category_label_table, inventory_value, normalize_inventory, summarize_inventory};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn inventory_value_converts_grams() {
    let payload = r#"{"items": [{"quantity": 500, "unit": "g", "pricePerUnit": 10}]}"#;
    assert_eq!(inventory_value(payload).unwrap(), 5.0);
}

#[wasm_bindgen_test]
fn invalid_payload_is_an_error() {
    assert!(normalize_inventory("{oops").is_err());
    assert!(summarize_inventory(r#"{"message": "ok"}"#, 2, None).is_err());
}

#[wasm_bindgen_test]
fn label_table_has_every_category() {
    let table = category_label_table("en");
    assert_eq!(table.length(), 16);
    let first = js_sys::Array::from(&table.get(0));
    assert_eq!(first.get(0), JsValue::from_str("meat"));
    assert_eq!(first.get(1), JsValue::from_str("Meat"));
}
