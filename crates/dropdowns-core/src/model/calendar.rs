// crates/dropdowns-core/src/model/calendar.rs
use crate::traits::SelectOption;
use serde::Serialize;
use std::fmt;

/// A month of the Gregorian calendar.
///
/// The option value is the two-digit month number (`"01"` … `"12"`), which
/// is what date inputs usually expect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Month {
    pub name: &'static str,
    pub abbreviation: &'static str,
    /// 1 = January.
    pub number: u32,
    #[serde(skip)]
    pub(crate) value: String,
}

impl SelectOption for Month {
    fn value(&self) -> &str {
        &self.value
    }

    fn text(&self) -> &str {
        self.name
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.abbreviation)
    }
}

/// A day of the week, Sunday first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Day {
    pub name: &'static str,
    pub abbreviation: &'static str,
    /// One- or two-letter form used in compact calendars (`"M"`, `"Tu"`).
    pub short_abbreviation: &'static str,
    /// 0 = Sunday … 6 = Saturday.
    pub number: u32,
    #[serde(skip)]
    pub(crate) value: String,
}

impl Day {
    pub fn is_weekend(&self) -> bool {
        self.number == 0 || self.number == 6
    }
}

impl SelectOption for Day {
    fn value(&self) -> &str {
        &self.value
    }

    fn text(&self) -> &str {
        self.name
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.abbreviation)
    }
}
