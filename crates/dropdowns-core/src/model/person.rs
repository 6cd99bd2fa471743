// crates/dropdowns-core/src/model/person.rs

//! Person-related pick lists: genders, marital statuses and name affixes.

use crate::traits::SelectOption;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Gender {
    pub name: &'static str,
    pub code: &'static str,
    pub number: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MaritalStatus {
    pub name: &'static str,
    pub code: &'static str,
    pub number: u32,
}

macro_rules! coded_option {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl SelectOption for $ty {
                fn value(&self) -> &str {
                    self.code
                }

                fn text(&self) -> &str {
                    self.name
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{} ({})", self.name, self.code)
                }
            }
        )+
    };
}

coded_option!(Gender, MaritalStatus);

/// A name suffix (`Jr.`, `PhD`, `CPA`, ...).
///
/// Suffixes are shown by their abbreviation; the value is the stable
/// number so that stored selections survive label changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Suffix {
    pub name: &'static str,
    pub abbreviation: &'static str,
    /// `Generational`, `Academic` or `Professional`.
    pub category: &'static str,
    pub number: u32,
    #[serde(skip)]
    pub(crate) value: String,
}

impl SelectOption for Suffix {
    fn value(&self) -> &str {
        &self.value
    }

    fn text(&self) -> &str {
        self.abbreviation
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.abbreviation)
    }
}

/// A name prefix or title (`Mr.`, `Dr.`, `Rev.`, ...), keyed by number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PrefixTitle {
    pub name: &'static str,
    pub abbreviation: &'static str,
    /// `Civilian`, `Professional`, `Religious` or `Honorific`.
    pub category: &'static str,
    pub number: u32,
    #[serde(skip)]
    pub(crate) value: String,
}

impl SelectOption for PrefixTitle {
    fn value(&self) -> &str {
        &self.value
    }

    fn text(&self) -> &str {
        self.name
    }
}

impl fmt::Display for PrefixTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.number)
    }
}
