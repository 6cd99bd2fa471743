// crates/dropdowns-core/src/model/country.rs
use crate::traits::SelectOption;
use serde::Serialize;
use std::fmt;

/// A country entry (ISO 3166-1).
///
/// The option value is the alpha-2 code, the label is the English short name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Country {
    pub name: &'static str,
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    /// Three digits, zero padded (e.g. `"004"`).
    pub numeric_code: &'static str,
    pub continent: &'static str,
}

impl SelectOption for Country {
    fn value(&self) -> &str {
        self.alpha2
    }

    fn text(&self) -> &str {
        self.name
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.alpha2)
    }
}
