// crates/dropdowns-core/src/api.rs

//! Flat, serializable views for UI and FFI layers.
//!
//! The entities borrow from the static tables and carry domain fields;
//! front-ends (JSON, wasm, CLI) usually only need `{value, text}`.

use crate::builder::OrderBy;
use crate::traits::SelectOption;
use serde::{Deserialize, Serialize};

/// An owned `{value, text}` pair, ready to render as an `<option>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionItem {
    pub value: String,
    pub text: String,
}

impl OptionItem {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }

    pub fn from_option<T: SelectOption + ?Sized>(option: &T) -> Self {
        Self::new(option.value(), option.text())
    }
}

impl<T: SelectOption + ?Sized> From<&T> for OptionItem {
    fn from(option: &T) -> Self {
        Self::from_option(option)
    }
}

impl SelectOption for OptionItem {
    fn value(&self) -> &str {
        &self.value
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Dataset-agnostic builder configuration.
///
/// Carries the generic part of a builder chain (allow-list, exclusions,
/// ordering) so it can be parsed from CLI flags or JS arguments and applied
/// to any dataset through [`Dropdowns::options`](crate::Dropdowns::options).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionQuery {
    pub only: Vec<String>,
    pub exclude: Vec<String>,
    pub order: Option<OrderBy>,
}

impl OptionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn only<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn exclude<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn order(mut self, order: OrderBy) -> Self {
        self.order = Some(order);
        self
    }
}

/// Serialize a list of options as a JSON array of `{value, text}` objects.
#[cfg(feature = "json")]
pub fn to_json(items: &[OptionItem]) -> crate::Result<String> {
    Ok(serde_json::to_string(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_accumulates_values() {
        let q = OptionQuery::new()
            .only(["TX", "CA"])
            .exclude(["CA"])
            .order(OrderBy::Text);
        assert_eq!(q.only, vec!["TX", "CA"]);
        assert_eq!(q.exclude, vec!["CA"]);
        assert_eq!(q.order, Some(OrderBy::Text));
    }

    #[test]
    fn converts_from_any_option() {
        let source = OptionItem::new("NA", "N/A");
        let copy: OptionItem = (&source).into();
        assert_eq!(copy, source);
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_is_a_flat_array() {
        let items = vec![OptionItem::new("TX", "Texas")];
        assert_eq!(to_json(&items).unwrap(), r#"[{"value":"TX","text":"Texas"}]"#);
    }
}
