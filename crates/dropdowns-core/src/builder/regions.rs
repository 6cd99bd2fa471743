// crates/dropdowns-core/src/builder/regions.rs

//! Builders for the US, Canadian and Mexican subdivision lists.
//!
//! Each starts from the "regular" members (50 states, 10 provinces, 31
//! states) and widens or narrows through boolean switches.

use super::{MexicanStateFilter, OptionBuilder, ProvinceFilter, UsStateFilter};
use crate::model::{CanadianProvince, MexicanState, UsState};

pub type UsStatesBuilder<'a> = OptionBuilder<'a, UsState, UsStateFilter>;
pub type CanadianProvincesBuilder<'a> = OptionBuilder<'a, CanadianProvince, ProvinceFilter>;
pub type MexicanStatesBuilder<'a> = OptionBuilder<'a, MexicanState, MexicanStateFilter>;

macro_rules! abbreviation_ordering {
    ($ty:ty, $filter:ty) => {
        impl<'a> OptionBuilder<'a, $ty, $filter> {
            pub fn order_by_name(self) -> Self {
                self.order_by_text()
            }

            pub fn order_by_name_descending(self) -> Self {
                self.order_by_text_descending()
            }

            pub fn order_by_abbreviation(self) -> Self {
                self.order_by_value()
            }

            pub fn order_by_abbreviation_descending(self) -> Self {
                self.order_by_value_descending()
            }
        }
    };
}

abbreviation_ordering!(UsState, UsStateFilter);
abbreviation_ordering!(CanadianProvince, ProvinceFilter);
abbreviation_ordering!(MexicanState, MexicanStateFilter);

impl<'a> OptionBuilder<'a, UsState, UsStateFilter> {
    /// Adds the District of Columbia.
    pub fn include_dc(mut self) -> Self {
        self.filter_mut().dc = true;
        self
    }

    /// Adds the five inhabited territories.
    pub fn include_territories(mut self) -> Self {
        self.filter_mut().territories = true;
        self
    }

    /// Adds DC and the territories; an earlier `exclude_states` still holds.
    pub fn include_all(mut self) -> Self {
        let filter = self.filter_mut();
        filter.dc = true;
        filter.territories = true;
        self
    }

    /// Drops the 50 states; combine with `include_dc` / `include_territories`.
    pub fn exclude_states(mut self) -> Self {
        self.filter_mut().states = false;
        self
    }
}

impl<'a> OptionBuilder<'a, CanadianProvince, ProvinceFilter> {
    pub fn include_territories(mut self) -> Self {
        self.filter_mut().territories = true;
        self
    }

    /// Adds the territories; an earlier `exclude_provinces` still holds.
    pub fn include_all(mut self) -> Self {
        self.filter_mut().territories = true;
        self
    }

    pub fn exclude_provinces(mut self) -> Self {
        self.filter_mut().provinces = false;
        self
    }
}

impl<'a> OptionBuilder<'a, MexicanState, MexicanStateFilter> {
    /// Adds Mexico City (CDMX).
    pub fn include_cdmx(mut self) -> Self {
        self.filter_mut().federal_district = true;
        self
    }

    pub fn exclude_states(mut self) -> Self {
        self.filter_mut().states = false;
        self
    }
}
