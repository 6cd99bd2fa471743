use wasm_bindgen_test::*;

use dropdowns_wasm::{dataset_count, option_text};

#[wasm_bindgen_test]
fn lists_every_dataset() {
    #[cfg(target_arch = "wasm32")]
    dropdowns_wasm::start();

    assert_eq!(dataset_count(), 12);
}

#[wasm_bindgen_test]
fn looks_up_option_text() {
    #[cfg(target_arch = "wasm32")]
    dropdowns_wasm::start();

    assert_eq!(option_text("us-states", " tx "), Some("Texas".to_string()));
    assert_eq!(
        option_text("time_zones", "etc/utc").as_deref(),
        Some("(UTC+00:00) Coordinated Universal Time")
    );
    assert_eq!(option_text("planets", "earth"), None);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen_test]
fn options_are_value_text_objects() {
    let list = dropdowns_wasm::get_options("yes-no", wasm_bindgen::JsValue::UNDEFINED)
        .unwrap_or_else(|_| panic!("yes-no options"));
    let array = js_sys::Array::from(&list);
    assert_eq!(array.length(), 4);
}
