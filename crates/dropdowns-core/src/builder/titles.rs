// crates/dropdowns-core/src/builder/titles.rs
use super::{CategorySets, OptionBuilder};
use crate::model::{PrefixTitle, Suffix};

pub type SuffixesBuilder<'a> = OptionBuilder<'a, Suffix, CategorySets>;
pub type PrefixTitlesBuilder<'a> = OptionBuilder<'a, PrefixTitle, CategorySets>;

macro_rules! category_methods {
    ($ty:ty) => {
        impl<'a> OptionBuilder<'a, $ty, CategorySets> {
            /// Keeps only these categories (case-insensitive). Accumulates.
            pub fn in_category<I, S>(mut self, categories: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: AsRef<str>,
            {
                self.filter_mut().included.extend(categories);
                self
            }

            pub fn exclude_category<I, S>(mut self, categories: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: AsRef<str>,
            {
                self.filter_mut().excluded.extend(categories);
                self
            }
        }
    };
}

category_methods!(Suffix);
category_methods!(PrefixTitle);

impl<'a> OptionBuilder<'a, Suffix, CategorySets> {
    /// Orders by the label, which for suffixes is the abbreviation.
    pub fn order_by_name(self) -> Self {
        self.order_by_text()
    }

    pub fn order_by_name_descending(self) -> Self {
        self.order_by_text_descending()
    }

    /// Orders by the value (the number as a string, compared ordinally).
    pub fn order_by_abbreviation(self) -> Self {
        self.order_by_value()
    }

    pub fn order_by_abbreviation_descending(self) -> Self {
        self.order_by_value_descending()
    }
}

impl<'a> OptionBuilder<'a, PrefixTitle, CategorySets> {
    /// Orders by the full name (`"Doctor"`), which is also the label.
    pub fn order_by_name(self) -> Self {
        self.order_by_text()
    }

    pub fn order_by_name_descending(self) -> Self {
        self.order_by_text_descending()
    }
}
