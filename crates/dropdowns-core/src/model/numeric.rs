// crates/dropdowns-core/src/model/numeric.rs
use crate::traits::SelectOption;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order of a generated sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn is_descending(self) -> bool {
        matches!(self, Direction::Descending)
    }
}

/// A generated number; value and label are both its decimal form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NumberOption {
    pub number: i32,
    #[serde(skip)]
    label: String,
}

impl NumberOption {
    pub fn new(number: i32) -> Self {
        Self {
            number,
            label: number.to_string(),
        }
    }
}

impl SelectOption for NumberOption {
    fn value(&self) -> &str {
        &self.label
    }

    fn text(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for NumberOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A generated calendar year.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct YearOption {
    pub year: i32,
    #[serde(skip)]
    label: String,
}

impl YearOption {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            label: year.to_string(),
        }
    }
}

impl SelectOption for YearOption {
    fn value(&self) -> &str {
        &self.label
    }

    fn text(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for YearOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
