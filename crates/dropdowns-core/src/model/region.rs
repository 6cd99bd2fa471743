// crates/dropdowns-core/src/model/region.rs

//! First-level subdivisions of the United States, Canada and Mexico.

use crate::traits::SelectOption;
use serde::Serialize;
use std::fmt;

/// A US state, the District of Columbia, or an inhabited territory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UsState {
    pub name: &'static str,
    /// USPS two-letter code.
    pub abbreviation: &'static str,
    pub is_territory: bool,
    pub is_dc: bool,
}

impl UsState {
    /// One of the 50 states (neither DC nor a territory).
    pub fn is_state(&self) -> bool {
        !self.is_dc && !self.is_territory
    }
}

/// A Canadian province or territory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CanadianProvince {
    pub name: &'static str,
    /// Canada Post two-letter code.
    pub abbreviation: &'static str,
    pub is_territory: bool,
}

/// A Mexican state, or Mexico City (the former federal district).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MexicanState {
    pub name: &'static str,
    /// ISO 3166-2:MX three-letter code.
    pub abbreviation: &'static str,
    pub is_federal_district: bool,
}

macro_rules! abbreviated_region {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl SelectOption for $ty {
                fn value(&self) -> &str {
                    self.abbreviation
                }

                fn text(&self) -> &str {
                    self.name
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{} ({})", self.name, self.abbreviation)
                }
            }
        )+
    };
}

abbreviated_region!(UsState, CanadianProvince, MexicanState);
