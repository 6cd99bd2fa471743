// crates/dropdowns-core/src/builder/yes_no.rs
use super::{CategorySets, OptionBuilder};
use crate::model::YesNo;

pub type YesNoOptionsBuilder<'a> = OptionBuilder<'a, YesNo, CategorySets>;

impl<'a> OptionBuilder<'a, YesNo, CategorySets> {
    /// Keeps only these presets (`Basic`, `Extended`).
    pub fn in_preset<I, S>(mut self, presets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter_mut().included.extend(presets);
        self
    }

    pub fn exclude_preset<I, S>(mut self, presets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter_mut().excluded.extend(presets);
        self
    }

    /// Yes, No and N/A. This is an allow-list, so preset rules stop applying.
    pub fn include_na(self) -> Self {
        self.only(["Y", "N", "NA"])
    }

    /// Yes, No and Unknown. This is an allow-list, so preset rules stop applying.
    pub fn include_unknown(self) -> Self {
        self.only(["Y", "N", "U"])
    }

    pub fn order_by_name(self) -> Self {
        self.order_by_text()
    }

    pub fn order_by_name_descending(self) -> Self {
        self.order_by_text_descending()
    }
}
