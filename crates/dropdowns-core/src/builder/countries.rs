// crates/dropdowns-core/src/builder/countries.rs
use super::{CategorySets, OptionBuilder};
use crate::model::Country;

/// Builder over [`Country`], grouped by continent.
pub type CountriesBuilder<'a> = OptionBuilder<'a, Country, CategorySets>;

impl<'a> OptionBuilder<'a, Country, CategorySets> {
    /// Keeps only countries on these continents (case-insensitive). Accumulates.
    pub fn in_continent<I, S>(mut self, continents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter_mut().included.extend(continents);
        self
    }

    pub fn exclude_continent<I, S>(mut self, continents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter_mut().excluded.extend(continents);
        self
    }

    pub fn order_by_name(self) -> Self {
        self.order_by_text()
    }

    pub fn order_by_name_descending(self) -> Self {
        self.order_by_text_descending()
    }

    /// Orders by alpha-2 code.
    pub fn order_by_code(self) -> Self {
        self.order_by_value()
    }

    pub fn order_by_code_descending(self) -> Self {
        self.order_by_value_descending()
    }
}
