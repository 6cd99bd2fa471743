//! dropdowns-wasm: WebAssembly bindings for dropdowns-core
//!
//! Every list comes back as a plain JS array of `{ value, text }` objects,
//! ready to feed an `<select>`.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - `dataset_names()` and `dataset_count()`
//! - `get_options(dataset, { only, exclude, order })`
//! - `find_option(dataset, value)`, `option_text(dataset, value)`
//! - `search_options(dataset, "que")` for type-ahead inputs
//! - `number_options(start, end, step, descending)`, `last_years(n)`, `next_years(n)`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { get_options } from 'dropdowns-wasm';
//!
//! async function main() {
//!   await init();
//!   const states = get_options('us-states', { exclude: ['AK', 'HI'], order: 'text' });
//!   for (const { value, text } of states) {
//!     select.add(new Option(text, value));
//!   }
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Datasets are compiled in; nothing is fetched at runtime.
//! - `get_options` starts from each dataset's default categories (the 50
//!   US states, the ten Canadian provinces, ...); an `only` list overrides them.
use dropdowns_core::{dropdowns, DatasetKind, OptionItem, OptionQuery, SelectOption};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(
        &format!("dropdowns-wasm: {} datasets available", DatasetKind::ALL.len()).into(),
    );
}

fn kind(name: &str) -> Result<DatasetKind, JsError> {
    Ok(name.parse::<DatasetKind>()?)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    Ok(to_value(value)?)
}

fn flatten<T: SelectOption>(items: &[T]) -> Vec<OptionItem> {
    items.iter().map(OptionItem::from_option).collect()
}

/* --------------------------------------------------------------------------
   Datasets
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn dataset_count() -> usize {
    DatasetKind::ALL.len()
}

#[wasm_bindgen]
pub fn dataset_names() -> js_sys::Array {
    DatasetKind::ALL
        .iter()
        .map(|kind| JsValue::from_str(kind.name()))
        .collect()
}

/* --------------------------------------------------------------------------
   Option Lists
-------------------------------------------------------------------------- */

/// `query` may be `undefined`, `null` or `{ only?, exclude?, order? }`
/// where `order` is `"text" | "text-descending" | "value" | "value-descending"`.
#[wasm_bindgen]
pub fn get_options(dataset: &str, query: JsValue) -> Result<JsValue, JsError> {
    let kind = kind(dataset)?;
    let query: OptionQuery = if query.is_undefined() || query.is_null() {
        OptionQuery::default()
    } else {
        serde_wasm_bindgen::from_value(query)?
    };
    to_js(&dropdowns().options(kind, &query))
}

/// The matching `{ value, text }`, or `null`.
#[wasm_bindgen]
pub fn find_option(dataset: &str, value: &str) -> Result<JsValue, JsError> {
    match dropdowns().lookup(kind(dataset)?, value) {
        Some(item) => to_js(&item),
        None => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen]
pub fn option_text(dataset: &str, value: &str) -> Option<String> {
    let kind = dataset.parse::<DatasetKind>().ok()?;
    dropdowns().lookup(kind, value).map(|item| item.text)
}

#[wasm_bindgen]
pub fn search_options(dataset: &str, query: &str) -> Result<JsValue, JsError> {
    to_js(&dropdowns().search(kind(dataset)?, query))
}

/// The same list as [`get_options`], as a JSON string.
#[wasm_bindgen]
pub fn get_options_json(dataset: &str) -> Result<String, JsError> {
    let items = dropdowns().options(kind(dataset)?, &OptionQuery::default());
    Ok(dropdowns_core::api::to_json(&items)?)
}

/* --------------------------------------------------------------------------
   Generated Lists
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn number_options(start: i32, end: i32, step: i32, descending: bool) -> Result<JsValue, JsError> {
    let mut range = dropdowns().numbers().range(start, end).step(step);
    if descending {
        range = range.descending();
    }
    to_js(&flatten(&range.build()?))
}

#[wasm_bindgen]
pub fn last_years(count: i32) -> Result<JsValue, JsError> {
    to_js(&flatten(&dropdowns().years().last(count)?))
}

#[wasm_bindgen]
pub fn next_years(count: i32) -> Result<JsValue, JsError> {
    to_js(&flatten(&dropdowns().years().next(count)?))
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsError> {
    let d = dropdowns();
    let counts: serde_json::Map<String, serde_json::Value> = DatasetKind::ALL
        .iter()
        .map(|kind| (kind.name().to_string(), d.all_options(*kind).len().into()))
        .collect();
    to_js(&counts)
}
