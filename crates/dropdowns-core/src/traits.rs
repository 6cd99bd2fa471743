// crates/dropdowns-core/src/traits.rs
use crate::api::OptionItem;
use crate::text::{eq_ignore_case, fold_key, normalize_query};

/// The option contract: a machine key and a display label.
///
/// Every dataset entity implements this; builders, search and the flat
/// [`OptionItem`] views depend on nothing else.
///
/// # Examples
/// ```rust
/// use dropdowns_core::traits::SelectOption;
///
/// struct Flavour(&'static str, &'static str);
/// impl SelectOption for Flavour {
///     fn value(&self) -> &str { self.0 }
///     fn text(&self) -> &str { self.1 }
/// }
///
/// let f = Flavour("VAN", "Vanilla");
/// assert_eq!(f.value(), "VAN");
/// assert_eq!(f.text(), "Vanilla");
/// ```
pub trait SelectOption {
    /// Value submitted when the option is chosen (e.g. `"TX"`, `"US"`, `"01"`).
    fn value(&self) -> &str;

    /// Label shown to the user (e.g. `"Texas"`, `"United States"`, `"January"`).
    fn text(&self) -> &str;
}

impl<T: SelectOption + ?Sized> SelectOption for &T {
    fn value(&self) -> &str {
        (**self).value()
    }

    fn text(&self) -> &str {
        (**self).text()
    }
}

/// Matching helpers for anything that is a [`SelectOption`].
///
/// - [`OptionMatch::has_value`]: trimmed, case-insensitive equality on the value
/// - [`OptionMatch::is_labelled`]: accent- and case-insensitive equality on the text
/// - [`OptionMatch::text_contains`]: accent- and case-insensitive substring on the text
pub trait OptionMatch: SelectOption {
    #[inline]
    fn has_value(&self, q: &str) -> bool {
        normalize_query(q).is_some_and(|q| eq_ignore_case(self.value(), q))
    }

    #[inline]
    fn is_labelled(&self, q: &str) -> bool {
        normalize_query(q).is_some_and(|q| fold_key(self.text()) == fold_key(q))
    }

    #[inline]
    fn text_contains(&self, q: &str) -> bool {
        normalize_query(q).is_some_and(|q| fold_key(self.text()).contains(&fold_key(q)))
    }
}

impl<T: SelectOption + ?Sized> OptionMatch for T {}

/// A provider that owns one fixed dataset.
///
/// Implementors only supply [`OptionSource::all`]; the value lookup,
/// type-ahead search and flat views come for free.
pub trait OptionSource {
    type Item: SelectOption;

    /// The full dataset in table order. Repeated calls return the same slice.
    fn all(&self) -> &[Self::Item];

    /// First item whose value matches `value` (trimmed, case-insensitive).
    fn by_value(&self, value: &str) -> Option<&Self::Item> {
        self.all().iter().find(|item| item.has_value(value))
    }

    /// Items whose text contains `query`, ignoring case and accents.
    ///
    /// Blank queries match nothing.
    fn search(&self, query: &str) -> Vec<&Self::Item> {
        let Some(q) = normalize_query(query) else {
            return Vec::new();
        };
        let q = fold_key(q);
        self.all()
            .iter()
            .filter(|item| fold_key(item.text()).contains(&q))
            .collect()
    }

    /// The whole dataset as flat `{value, text}` pairs.
    fn options(&self) -> Vec<OptionItem> {
        self.all().iter().map(OptionItem::from_option).collect()
    }
}
