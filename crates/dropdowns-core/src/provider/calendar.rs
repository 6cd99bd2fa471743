// crates/dropdowns-core/src/provider/calendar.rs
use super::find_by;
use crate::builder::{DaysBuilder, MonthsBuilder};
use crate::model::{convert, Day, Month};

provider! {
    /// January to December; values are `"01"` … `"12"`.
    Months => Month, "months", convert::months, MonthsBuilder
}

impl Months {
    /// 1 = January. Anything outside 1..=12 is `None`.
    pub fn by_number(&self, number: u32) -> Option<&Month> {
        self.all().iter().find(|m| m.number == number)
    }

    pub fn by_name(&self, name: &str) -> Option<&Month> {
        find_by(self.all(), name, |m| m.name)
    }

    pub fn by_abbreviation(&self, abbreviation: &str) -> Option<&Month> {
        find_by(self.all(), abbreviation, |m| m.abbreviation)
    }
}

provider! {
    /// Sunday to Saturday; values are `"0"` … `"6"`.
    Days => Day, "days", convert::days, DaysBuilder
}

impl Days {
    /// 0 = Sunday.
    pub fn by_number(&self, number: u32) -> Option<&Day> {
        self.all().iter().find(|d| d.number == number)
    }

    pub fn by_name(&self, name: &str) -> Option<&Day> {
        find_by(self.all(), name, |d| d.name)
    }

    pub fn by_abbreviation(&self, abbreviation: &str) -> Option<&Day> {
        find_by(self.all(), abbreviation, |d| d.abbreviation)
    }

    pub fn by_short_abbreviation(&self, abbreviation: &str) -> Option<&Day> {
        find_by(self.all(), abbreviation, |d| d.short_abbreviation)
    }
}
