// crates/dropdowns-core/src/model/yes_no.rs
use crate::traits::SelectOption;
use serde::Serialize;
use std::fmt;

/// Preset holding the plain Yes / No pair.
pub const PRESET_BASIC: &str = "Basic";
/// Preset holding the optional answers (N/A, Unknown).
pub const PRESET_EXTENDED: &str = "Extended";

/// A yes/no style answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct YesNo {
    pub name: &'static str,
    pub code: &'static str,
    pub number: u32,
    pub preset: &'static str,
}

impl SelectOption for YesNo {
    fn value(&self) -> &str {
        self.code
    }

    fn text(&self) -> &str {
        self.name
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
