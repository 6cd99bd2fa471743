// crates/dropdowns-core/src/provider/person.rs
use super::{distinct, filter_by, find_by};
use crate::builder::{GendersBuilder, MaritalStatusesBuilder, PrefixTitlesBuilder, SuffixesBuilder};
use crate::model::{convert, Gender, MaritalStatus, PrefixTitle, Suffix};

provider! {
    Genders => Gender, "genders", convert::genders, GendersBuilder
}

provider! {
    MaritalStatuses => MaritalStatus, "marital-statuses", convert::marital_statuses, MaritalStatusesBuilder
}

macro_rules! coded_lookups {
    ($provider:ty, $item:ty) => {
        impl $provider {
            pub fn by_code(&self, code: &str) -> Option<&$item> {
                find_by(self.all(), code, |i| i.code)
            }

            pub fn by_name(&self, name: &str) -> Option<&$item> {
                find_by(self.all(), name, |i| i.name)
            }

            pub fn by_number(&self, number: u32) -> Option<&$item> {
                self.all().iter().find(|i| i.number == number)
            }
        }
    };
}

coded_lookups!(Genders, Gender);
coded_lookups!(MaritalStatuses, MaritalStatus);

provider! {
    /// Name suffixes, shown by abbreviation and keyed by number.
    Suffixes => Suffix, "suffixes", convert::suffixes, SuffixesBuilder
}

provider! {
    /// Prefixes and titles, keyed by number.
    PrefixTitles => PrefixTitle, "prefix-titles", convert::prefix_titles, PrefixTitlesBuilder
}

macro_rules! title_lookups {
    ($provider:ty, $item:ty) => {
        impl $provider {
            /// Entries in `category`, table order. Blank or unknown → empty.
            pub fn by_category(&self, category: &str) -> Vec<&$item> {
                filter_by(self.all(), category, |i| i.category)
            }

            /// Category names in order of first appearance.
            pub fn categories(&self) -> Vec<&'static str> {
                distinct(self.all(), |i| i.category)
            }

            pub fn by_number(&self, number: u32) -> Option<&$item> {
                self.all().iter().find(|i| i.number == number)
            }

            pub fn by_abbreviation(&self, abbreviation: &str) -> Option<&$item> {
                find_by(self.all(), abbreviation, |i| i.abbreviation)
            }

            pub fn by_name(&self, name: &str) -> Option<&$item> {
                find_by(self.all(), name, |i| i.name)
            }
        }
    };
}

title_lookups!(Suffixes, Suffix);
title_lookups!(PrefixTitles, PrefixTitle);
