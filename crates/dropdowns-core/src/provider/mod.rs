// crates/dropdowns-core/src/provider/mod.rs

//! # Providers
//!
//! One provider per dataset. A provider owns a lazily materialized
//! [`Dataset`], exposes the named views and lookups for that dataset and
//! hands out builders borrowing from it.
//!
//! All string lookups trim their input, ignore case and return the first
//! match in table order; blank input is `None` (or an empty list).
//! Numeric lookups compare exactly.
//!
//! `Numbers` and `Years` are generators rather than datasets: they own no
//! data and build a fresh list per call.

use crate::text::{eq_ignore_case, normalize_query};

macro_rules! provider {
    (
        $(#[$meta:meta])*
        $name:ident => $item:ty, $dataset:literal, $init:path, $builder:ident
    ) => {
        $(#[$meta])*
        pub struct $name {
            data: $crate::loader::Dataset<$item>,
        }

        impl $name {
            pub const fn new() -> Self {
                Self {
                    data: $crate::loader::Dataset::new($dataset, $init),
                }
            }

            /// Every entry in table order. Repeated calls return the same slice.
            pub fn all(&self) -> &[$item] {
                self.data.get()
            }

            /// A fresh builder over this dataset with the default categories.
            pub fn builder(&self) -> $builder<'_> {
                $crate::builder::OptionBuilder::new(self.all(), Default::default())
            }

            /// Whether the dataset has been materialized yet.
            pub fn is_loaded(&self) -> bool {
                self.data.is_loaded()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name)).field("data", &self.data).finish()
            }
        }

        impl $crate::traits::OptionSource for $name {
            type Item = $item;

            fn all(&self) -> &[$item] {
                self.data.get()
            }
        }
    };
}

mod calendar;
mod countries;
mod numbers;
mod person;
mod regions;
mod time_zones;
mod years;
mod yes_no;

pub use calendar::{Days, Months};
pub use countries::Countries;
pub use numbers::{NumberRange, Numbers};
pub use person::{Genders, MaritalStatuses, PrefixTitles, Suffixes};
pub use regions::{CanadianProvinces, MexicanStates, UsStates};
pub use time_zones::TimeZones;
pub use years::Years;
pub use yes_no::YesNoOptions;

/// First item whose `key` equals `query` (trimmed, case-insensitive).
pub(crate) fn find_by<'a, T>(
    items: &'a [T],
    query: &str,
    key: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    let q = normalize_query(query)?;
    items.iter().find(|item| eq_ignore_case(key(item), q))
}

/// Every item whose `key` equals `query`; blank input yields nothing.
pub(crate) fn filter_by<'a, T>(items: &'a [T], query: &str, key: impl Fn(&T) -> &str) -> Vec<&'a T> {
    match normalize_query(query) {
        Some(q) => items
            .iter()
            .filter(|item| eq_ignore_case(key(item), q))
            .collect(),
        None => Vec::new(),
    }
}

/// Distinct values of a category attribute, in order of first appearance.
pub(crate) fn distinct<T>(items: &[T], key: impl Fn(&T) -> &'static str) -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for item in items {
        let k = key(item);
        if !seen.contains(&k) {
            seen.push(k);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::OptionItem;

    fn items() -> Vec<OptionItem> {
        vec![
            OptionItem::new("a", "Alpha"),
            OptionItem::new("b", "Bravo"),
            OptionItem::new("c", "alpha"),
        ]
    }

    #[test]
    fn find_by_trims_and_ignores_case() {
        let data = items();
        let hit = find_by(&data, "  ALPHA ", |i| i.text.as_str());
        assert_eq!(hit.map(|i| i.value.as_str()), Some("a"));
        assert!(find_by(&data, "   ", |i| i.text.as_str()).is_none());
        assert!(find_by(&data, "Charlie", |i| i.text.as_str()).is_none());
    }

    #[test]
    fn filter_by_collects_every_match() {
        let data = items();
        assert_eq!(filter_by(&data, "alpha", |i| i.text.as_str()).len(), 2);
        assert!(filter_by(&data, "", |i| i.text.as_str()).is_empty());
    }
}
