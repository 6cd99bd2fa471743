// crates/dropdowns-core/src/provider/yes_no.rs
use super::find_by;
use crate::builder::YesNoOptionsBuilder;
use crate::model::yes_no::PRESET_BASIC;
use crate::model::{convert, YesNo};

provider! {
    /// Yes / No answers plus the optional N/A and Unknown.
    YesNoOptions => YesNo, "yes-no", convert::yes_no, YesNoOptionsBuilder
}

impl YesNoOptions {
    /// Yes and No.
    pub fn basic(&self) -> Vec<&YesNo> {
        self.preset_plus(None)
    }

    /// Yes, No and N/A.
    pub fn with_na(&self) -> Vec<&YesNo> {
        self.preset_plus(Some("NA"))
    }

    /// Yes, No and Unknown.
    pub fn with_unknown(&self) -> Vec<&YesNo> {
        self.preset_plus(Some("U"))
    }

    fn preset_plus(&self, extra: Option<&str>) -> Vec<&YesNo> {
        self.all()
            .iter()
            .filter(|o| o.preset == PRESET_BASIC || extra.is_some_and(|code| o.code == code))
            .collect()
    }

    pub fn by_code(&self, code: &str) -> Option<&YesNo> {
        find_by(self.all(), code, |o| o.code)
    }

    pub fn by_name(&self, name: &str) -> Option<&YesNo> {
        find_by(self.all(), name, |o| o.name)
    }

    pub fn by_number(&self, number: u32) -> Option<&YesNo> {
        self.all().iter().find(|o| o.number == number)
    }
}
