// crates/dropdowns-core/src/builder/mod.rs

//! # Option Builder
//!
//! One filtering algorithm shared by every dataset. A builder is an
//! [`OptionBuilder`] over the dataset's entity type plus a category state
//! `F` that knows the dataset's own grouping rules (continent, territory
//! flag, DST, ...). The dataset modules only add chaining methods for that
//! state and a few ordering aliases.
//!
//! `build()` runs, in this order:
//! 1. start from the full dataset;
//! 2. if an allow-list was given (`only`), keep just those values and skip
//!    the category filter entirely;
//! 3. otherwise keep what the category filter accepts;
//! 4. drop excluded values (always, even under an allow-list);
//! 5. apply the ordering, if any (stable, so ties keep table order).

use crate::text::KeySet;
use crate::traits::SelectOption;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

mod countries;
mod filters;
mod regions;
mod simple;
mod time_zones;
mod titles;
mod yes_no;

pub use countries::CountriesBuilder;
pub use filters::{CategorySets, MexicanStateFilter, ProvinceFilter, TimeZoneFilter, UsStateFilter};
pub use regions::{CanadianProvincesBuilder, MexicanStatesBuilder, UsStatesBuilder};
pub use simple::{DaysBuilder, GendersBuilder, MaritalStatusesBuilder, MonthsBuilder};
pub use time_zones::TimeZonesBuilder;
pub use titles::{PrefixTitlesBuilder, SuffixesBuilder};
pub use yes_no::YesNoOptionsBuilder;

/// Dataset-specific inclusion rule, consulted only when no allow-list is set.
pub trait CategoryFilter<T> {
    fn accepts(&self, item: &T) -> bool;
}

/// Category state for datasets without categories: accepts everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoCategories;

impl<T> CategoryFilter<T> for NoCategories {
    #[inline]
    fn accepts(&self, _item: &T) -> bool {
        true
    }
}

/// Sort comparator stored by a builder.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// The generic orderings every builder offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderBy {
    Text,
    TextDescending,
    Value,
    ValueDescending,
}

impl OrderBy {
    /// Ordinal (code point) comparator for this ordering.
    pub fn comparator<T: SelectOption>(self) -> Comparator<T> {
        match self {
            OrderBy::Text => by_text::<T>,
            OrderBy::TextDescending => by_text_descending::<T>,
            OrderBy::Value => by_value::<T>,
            OrderBy::ValueDescending => by_value_descending::<T>,
        }
    }
}

fn by_text<T: SelectOption>(a: &T, b: &T) -> Ordering {
    a.text().cmp(b.text())
}

fn by_text_descending<T: SelectOption>(a: &T, b: &T) -> Ordering {
    b.text().cmp(a.text())
}

fn by_value<T: SelectOption>(a: &T, b: &T) -> Ordering {
    a.value().cmp(b.value())
}

fn by_value_descending<T: SelectOption>(a: &T, b: &T) -> Ordering {
    b.value().cmp(a.value())
}

/// Fluent filter / order pipeline over one dataset.
///
/// Chaining methods take the builder by value and hand it back; [`build`]
/// borrows it, so the same configuration can be built repeatedly.
///
/// # Examples
/// ```
/// use dropdowns_core::dropdowns;
///
/// let states = dropdowns()
///     .us_states()
///     .builder()
///     .include_dc()
///     .exclude(["AK", "HI"])
///     .order_by_name()
///     .build();
///
/// assert_eq!(states.len(), 49);
/// assert_eq!(states[0].name, "Alabama");
/// ```
///
/// [`build`]: OptionBuilder::build
pub struct OptionBuilder<'a, T, F = NoCategories> {
    source: &'a [T],
    excluded: KeySet,
    included: KeySet,
    order_by: Option<Comparator<T>>,
    filter: F,
}

impl<'a, T, F> OptionBuilder<'a, T, F>
where
    T: SelectOption,
    F: CategoryFilter<T>,
{
    /// A builder over `source` with the given initial category state.
    pub fn new(source: &'a [T], filter: F) -> Self {
        Self {
            source,
            excluded: KeySet::new(),
            included: KeySet::new(),
            order_by: None,
            filter,
        }
    }

    /// Drops items by value. Blank entries are ignored; repeated calls accumulate.
    pub fn exclude<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded.extend(values);
        self
    }

    /// Restricts the result to these values and bypasses category rules.
    ///
    /// Blank entries are ignored; repeated calls accumulate.
    pub fn only<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.included.extend(values);
        self
    }

    pub fn order_by_text(self) -> Self {
        self.order(OrderBy::Text)
    }

    pub fn order_by_text_descending(self) -> Self {
        self.order(OrderBy::TextDescending)
    }

    pub fn order_by_value(self) -> Self {
        self.order(OrderBy::Value)
    }

    pub fn order_by_value_descending(self) -> Self {
        self.order(OrderBy::ValueDescending)
    }

    /// Sets one of the generic orderings. Replaces any earlier ordering.
    pub fn order(self, order: OrderBy) -> Self {
        self.order_by(order.comparator::<T>())
    }

    /// Sets a custom comparator. Replaces any earlier ordering.
    pub fn order_by(mut self, compare: Comparator<T>) -> Self {
        self.order_by = Some(compare);
        self
    }

    /// Runs the pipeline.
    pub fn build(&self) -> Vec<&'a T> {
        let mut items: Vec<&'a T> = if self.included.is_empty() {
            self.source
                .iter()
                .filter(|item| self.filter.accepts(item))
                .collect()
        } else {
            self.source
                .iter()
                .filter(|item| self.included.contains(item.value()))
                .collect()
        };

        if !self.excluded.is_empty() {
            items.retain(|item| !self.excluded.contains(item.value()));
        }

        if let Some(compare) = self.order_by {
            items.sort_by(|a, b| compare(a, b));
        }

        tracing::trace!(
            source = self.source.len(),
            result = items.len(),
            "built option list"
        );
        items
    }

    /// The category state, for dataset-specific chaining methods.
    pub(crate) fn filter_mut(&mut self) -> &mut F {
        &mut self.filter
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }
}

impl<T, F: fmt::Debug> fmt::Debug for OptionBuilder<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionBuilder")
            .field("source", &self.source.len())
            .field("excluded", &self.excluded)
            .field("included", &self.included)
            .field("ordered", &self.order_by.is_some())
            .field("filter", &self.filter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::OptionItem;

    struct EvenOnly;

    impl CategoryFilter<OptionItem> for EvenOnly {
        fn accepts(&self, item: &OptionItem) -> bool {
            item.value.parse::<u32>().is_ok_and(|n| n % 2 == 0)
        }
    }

    fn items() -> Vec<OptionItem> {
        vec![
            OptionItem::new("1", "one"),
            OptionItem::new("2", "two"),
            OptionItem::new("3", "three"),
            OptionItem::new("4", "four"),
        ]
    }

    fn values(list: &[&OptionItem]) -> Vec<String> {
        list.iter().map(|i| i.value.clone()).collect()
    }

    #[test]
    fn category_filter_applies_without_allow_list() {
        let data = items();
        let built = OptionBuilder::new(&data, EvenOnly).build();
        assert_eq!(values(&built), ["2", "4"]);
    }

    #[test]
    fn allow_list_bypasses_category_filter() {
        let data = items();
        let built = OptionBuilder::new(&data, EvenOnly).only(["3"]).build();
        assert_eq!(values(&built), ["3"]);
    }

    #[test]
    fn exclusions_apply_under_an_allow_list() {
        let data = items();
        let built = OptionBuilder::new(&data, NoCategories)
            .only(["1", "2"])
            .exclude(["2"])
            .build();
        assert_eq!(values(&built), ["1"]);
    }

    #[test]
    fn last_ordering_wins() {
        let data = items();
        let built = OptionBuilder::new(&data, NoCategories)
            .order_by_value()
            .order_by_text()
            .build();
        assert_eq!(values(&built), ["4", "1", "3", "2"]);
    }

    #[test]
    fn descending_sort_is_stable() {
        let data = vec![
            OptionItem::new("a", "same"),
            OptionItem::new("b", "same"),
            OptionItem::new("c", "other"),
        ];
        let built = OptionBuilder::new(&data, NoCategories)
            .order_by_text_descending()
            .build();
        assert_eq!(values(&built), ["a", "b", "c"]);
    }
}
