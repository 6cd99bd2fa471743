// crates/dropdowns-core/src/registry.rs

//! # Registry
//!
//! [`Dropdowns`] bundles one instance of every provider. Construction is
//! `const` and free; each dataset is materialized the first time it is
//! read. The process-wide instance is reached through [`dropdowns()`].
//!
//! [`DatasetKind`] names the static datasets so front-ends (CLI, wasm) can
//! work with them without knowing their entity types.

use crate::api::{OptionItem, OptionQuery};
use crate::builder::{CategoryFilter, OptionBuilder};
use crate::error::DropdownError;
use crate::provider::{
    CanadianProvinces, Countries, Days, Genders, MaritalStatuses, MexicanStates, Months, Numbers,
    PrefixTitles, Suffixes, TimeZones, UsStates, Years, YesNoOptions,
};
use crate::traits::{OptionSource, SelectOption};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static DROPDOWNS: Dropdowns = Dropdowns::new();

/// The shared registry.
///
/// ```
/// use dropdowns_core::dropdowns;
///
/// let texas = dropdowns().us_states().by_abbreviation("tx");
/// assert_eq!(texas.map(|s| s.name), Some("Texas"));
/// assert!(std::ptr::eq(dropdowns(), dropdowns()));
/// ```
pub fn dropdowns() -> &'static Dropdowns {
    &DROPDOWNS
}

/// All providers in one place.
#[derive(Debug, Default)]
pub struct Dropdowns {
    countries: Countries,
    us_states: UsStates,
    canadian_provinces: CanadianProvinces,
    mexican_states: MexicanStates,
    months: Months,
    days: Days,
    genders: Genders,
    marital_statuses: MaritalStatuses,
    suffixes: Suffixes,
    prefix_titles: PrefixTitles,
    time_zones: TimeZones,
    yes_no: YesNoOptions,
    numbers: Numbers,
    years: Years,
}

impl Dropdowns {
    /// A registry with its own (unloaded) datasets.
    pub const fn new() -> Self {
        Self {
            countries: Countries::new(),
            us_states: UsStates::new(),
            canadian_provinces: CanadianProvinces::new(),
            mexican_states: MexicanStates::new(),
            months: Months::new(),
            days: Days::new(),
            genders: Genders::new(),
            marital_statuses: MaritalStatuses::new(),
            suffixes: Suffixes::new(),
            prefix_titles: PrefixTitles::new(),
            time_zones: TimeZones::new(),
            yes_no: YesNoOptions::new(),
            numbers: Numbers::new(),
            years: Years::new(),
        }
    }

    pub fn countries(&self) -> &Countries {
        &self.countries
    }

    pub fn us_states(&self) -> &UsStates {
        &self.us_states
    }

    pub fn canadian_provinces(&self) -> &CanadianProvinces {
        &self.canadian_provinces
    }

    pub fn mexican_states(&self) -> &MexicanStates {
        &self.mexican_states
    }

    pub fn months(&self) -> &Months {
        &self.months
    }

    pub fn days(&self) -> &Days {
        &self.days
    }

    pub fn genders(&self) -> &Genders {
        &self.genders
    }

    pub fn marital_statuses(&self) -> &MaritalStatuses {
        &self.marital_statuses
    }

    pub fn suffixes(&self) -> &Suffixes {
        &self.suffixes
    }

    pub fn prefix_titles(&self) -> &PrefixTitles {
        &self.prefix_titles
    }

    pub fn time_zones(&self) -> &TimeZones {
        &self.time_zones
    }

    pub fn yes_no(&self) -> &YesNoOptions {
        &self.yes_no
    }

    pub fn numbers(&self) -> &Numbers {
        &self.numbers
    }

    pub fn years(&self) -> &Years {
        &self.years
    }

    /// Runs `query` through the dataset's builder.
    ///
    /// The builder starts from its default categories, so `UsStates` yields
    /// the 50 states and `CanadianProvinces` the ten provinces unless the
    /// allow-list names other entries.
    pub fn options(&self, kind: DatasetKind, query: &OptionQuery) -> Vec<OptionItem> {
        match kind {
            DatasetKind::Countries => run(self.countries.builder(), query),
            DatasetKind::UsStates => run(self.us_states.builder(), query),
            DatasetKind::CanadianProvinces => run(self.canadian_provinces.builder(), query),
            DatasetKind::MexicanStates => run(self.mexican_states.builder(), query),
            DatasetKind::Months => run(self.months.builder(), query),
            DatasetKind::Days => run(self.days.builder(), query),
            DatasetKind::Genders => run(self.genders.builder(), query),
            DatasetKind::MaritalStatuses => run(self.marital_statuses.builder(), query),
            DatasetKind::Suffixes => run(self.suffixes.builder(), query),
            DatasetKind::PrefixTitles => run(self.prefix_titles.builder(), query),
            DatasetKind::TimeZones => run(self.time_zones.builder(), query),
            DatasetKind::YesNo => run(self.yes_no.builder(), query),
        }
    }

    /// Every entry of the dataset, unfiltered.
    pub fn all_options(&self, kind: DatasetKind) -> Vec<OptionItem> {
        self.source(kind).options()
    }

    /// Value lookup (trimmed, case-insensitive).
    pub fn lookup(&self, kind: DatasetKind, value: &str) -> Option<OptionItem> {
        self.source(kind).lookup(value)
    }

    /// Type-ahead search on the labels of one dataset.
    pub fn search(&self, kind: DatasetKind, query: &str) -> Vec<OptionItem> {
        self.source(kind).search(query)
    }

    fn source(&self, kind: DatasetKind) -> &dyn FlatSource {
        match kind {
            DatasetKind::Countries => &self.countries,
            DatasetKind::UsStates => &self.us_states,
            DatasetKind::CanadianProvinces => &self.canadian_provinces,
            DatasetKind::MexicanStates => &self.mexican_states,
            DatasetKind::Months => &self.months,
            DatasetKind::Days => &self.days,
            DatasetKind::Genders => &self.genders,
            DatasetKind::MaritalStatuses => &self.marital_statuses,
            DatasetKind::Suffixes => &self.suffixes,
            DatasetKind::PrefixTitles => &self.prefix_titles,
            DatasetKind::TimeZones => &self.time_zones,
            DatasetKind::YesNo => &self.yes_no,
        }
    }
}

fn run<T, F>(builder: OptionBuilder<'_, T, F>, query: &OptionQuery) -> Vec<OptionItem>
where
    T: SelectOption,
    F: CategoryFilter<T>,
{
    let mut builder = builder.only(&query.only).exclude(&query.exclude);
    if let Some(order) = query.order {
        builder = builder.order(order);
    }
    builder
        .build()
        .into_iter()
        .map(OptionItem::from_option)
        .collect()
}

/// Object-safe view over an [`OptionSource`], flattened to [`OptionItem`]s.
trait FlatSource {
    fn options(&self) -> Vec<OptionItem>;
    fn lookup(&self, value: &str) -> Option<OptionItem>;
    fn search(&self, query: &str) -> Vec<OptionItem>;
}

impl<S: OptionSource> FlatSource for S {
    fn options(&self) -> Vec<OptionItem> {
        OptionSource::options(self)
    }

    fn lookup(&self, value: &str) -> Option<OptionItem> {
        self.by_value(value).map(OptionItem::from_option)
    }

    fn search(&self, query: &str) -> Vec<OptionItem> {
        OptionSource::search(self, query)
            .into_iter()
            .map(OptionItem::from_option)
            .collect()
    }
}

/// The static datasets, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKind {
    Countries,
    UsStates,
    CanadianProvinces,
    MexicanStates,
    Months,
    Days,
    Genders,
    MaritalStatuses,
    Suffixes,
    PrefixTitles,
    TimeZones,
    YesNo,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 12] = [
        DatasetKind::Countries,
        DatasetKind::UsStates,
        DatasetKind::CanadianProvinces,
        DatasetKind::MexicanStates,
        DatasetKind::Months,
        DatasetKind::Days,
        DatasetKind::Genders,
        DatasetKind::MaritalStatuses,
        DatasetKind::Suffixes,
        DatasetKind::PrefixTitles,
        DatasetKind::TimeZones,
        DatasetKind::YesNo,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            DatasetKind::Countries => "countries",
            DatasetKind::UsStates => "us-states",
            DatasetKind::CanadianProvinces => "canadian-provinces",
            DatasetKind::MexicanStates => "mexican-states",
            DatasetKind::Months => "months",
            DatasetKind::Days => "days",
            DatasetKind::Genders => "genders",
            DatasetKind::MaritalStatuses => "marital-statuses",
            DatasetKind::Suffixes => "suffixes",
            DatasetKind::PrefixTitles => "prefix-titles",
            DatasetKind::TimeZones => "time-zones",
            DatasetKind::YesNo => "yes-no",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `us-states`, `us_states`, `UsStates`, `usstates`, ...
impl FromStr for DatasetKind {
    type Err = DropdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = compact(s);
        DatasetKind::ALL
            .into_iter()
            .find(|kind| compact(kind.name()) == key)
            .ok_or_else(|| DropdownError::UnknownDataset(s.trim().to_string()))
    }
}

fn compact(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::OrderBy;

    #[test]
    fn dataset_names_round_trip() {
        for kind in DatasetKind::ALL {
            assert_eq!(kind.name().parse::<DatasetKind>().unwrap(), kind);
        }
        assert_eq!("US_STATES".parse::<DatasetKind>().unwrap(), DatasetKind::UsStates);
        assert_eq!(" YesNo ".parse::<DatasetKind>().unwrap(), DatasetKind::YesNo);
        assert!(matches!(
            "planets".parse::<DatasetKind>(),
            Err(DropdownError::UnknownDataset(name)) if name == "planets"
        ));
    }

    #[test]
    fn options_follow_the_query() {
        let registry = Dropdowns::new();
        let query = OptionQuery::new()
            .only(["tx", "CA", "dc"])
            .order(OrderBy::ValueDescending);
        let items = registry.options(DatasetKind::UsStates, &query);
        let values: Vec<&str> = items.iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, ["TX", "DC", "CA"]);
    }

    #[test]
    fn datasets_load_on_first_use() {
        let registry = Dropdowns::new();
        assert!(!registry.months().is_loaded());
        assert_eq!(
            registry.lookup(DatasetKind::Months, "03").map(|i| i.text),
            Some("March".to_string())
        );
        assert!(registry.months().is_loaded());
        assert!(!registry.days().is_loaded());
    }
}
