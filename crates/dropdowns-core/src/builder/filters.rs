// crates/dropdowns-core/src/builder/filters.rs

//! Category state for the dataset builders.

use super::CategoryFilter;
use crate::model::{
    CanadianProvince, Country, MexicanState, PrefixTitle, Suffix, TimeZone, UsState, YesNo,
};
use crate::text::KeySet;

/// Case-insensitive include / exclude sets over one category attribute.
///
/// Empty include set means "every category"; exclusions are applied after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySets {
    pub included: KeySet,
    pub excluded: KeySet,
}

impl CategorySets {
    pub fn admits(&self, category: &str) -> bool {
        (self.included.is_empty() || self.included.contains(category))
            && !self.excluded.contains(category)
    }
}

impl CategoryFilter<Country> for CategorySets {
    fn accepts(&self, item: &Country) -> bool {
        self.admits(item.continent)
    }
}

impl CategoryFilter<Suffix> for CategorySets {
    fn accepts(&self, item: &Suffix) -> bool {
        self.admits(item.category)
    }
}

impl CategoryFilter<PrefixTitle> for CategorySets {
    fn accepts(&self, item: &PrefixTitle) -> bool {
        self.admits(item.category)
    }
}

impl CategoryFilter<YesNo> for CategorySets {
    fn accepts(&self, item: &YesNo) -> bool {
        self.admits(item.preset)
    }
}

/// Which kinds of US subdivision to keep. Defaults to the 50 states only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsStateFilter {
    pub states: bool,
    pub dc: bool,
    pub territories: bool,
}

impl Default for UsStateFilter {
    fn default() -> Self {
        Self {
            states: true,
            dc: false,
            territories: false,
        }
    }
}

impl CategoryFilter<UsState> for UsStateFilter {
    fn accepts(&self, s: &UsState) -> bool {
        (self.states && s.is_state()) || (self.dc && s.is_dc) || (self.territories && s.is_territory)
    }
}

/// Provinces and/or territories. Defaults to provinces only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvinceFilter {
    pub provinces: bool,
    pub territories: bool,
}

impl Default for ProvinceFilter {
    fn default() -> Self {
        Self {
            provinces: true,
            territories: false,
        }
    }
}

impl CategoryFilter<CanadianProvince> for ProvinceFilter {
    fn accepts(&self, p: &CanadianProvince) -> bool {
        (self.provinces && !p.is_territory) || (self.territories && p.is_territory)
    }
}

/// States and/or Mexico City. Defaults to the 31 states only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MexicanStateFilter {
    pub states: bool,
    pub federal_district: bool,
}

impl Default for MexicanStateFilter {
    fn default() -> Self {
        Self {
            states: true,
            federal_district: false,
        }
    }
}

impl CategoryFilter<MexicanState> for MexicanStateFilter {
    fn accepts(&self, s: &MexicanState) -> bool {
        (self.states && !s.is_federal_district) || (self.federal_district && s.is_federal_district)
    }
}

/// Region sets plus an optional daylight-saving requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeZoneFilter {
    pub regions: CategorySets,
    /// `Some(true)`: DST zones only, `Some(false)`: non-DST only.
    pub observes_dst: Option<bool>,
}

impl CategoryFilter<TimeZone> for TimeZoneFilter {
    fn accepts(&self, tz: &TimeZone) -> bool {
        self.regions.admits(tz.region)
            && self.observes_dst.map_or(true, |dst| tz.observes_dst == dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_sets_combine_include_and_exclude() {
        let mut sets = CategorySets::default();
        assert!(sets.admits("Europe"));

        sets.included.extend(["europe", "Asia"]);
        sets.excluded.extend(["ASIA"]);
        assert!(sets.admits("Europe"));
        assert!(!sets.admits("Asia"));
        assert!(!sets.admits("Africa"));
    }

    #[test]
    fn us_filter_defaults_to_states() {
        let f = UsStateFilter::default();
        let dc = UsState {
            name: "District of Columbia",
            abbreviation: "DC",
            is_territory: false,
            is_dc: true,
        };
        assert!(!f.accepts(&dc));
        assert!(UsStateFilter { dc: true, ..f }.accepts(&dc));
    }
}
