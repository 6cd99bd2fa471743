// crates/dropdowns-core/src/builder/simple.rs

//! Builders for datasets without categories.

use super::{NoCategories, OptionBuilder};
use crate::model::{Day, Gender, MaritalStatus, Month};

pub type MonthsBuilder<'a> = OptionBuilder<'a, Month>;
pub type DaysBuilder<'a> = OptionBuilder<'a, Day>;
pub type GendersBuilder<'a> = OptionBuilder<'a, Gender>;
pub type MaritalStatusesBuilder<'a> = OptionBuilder<'a, MaritalStatus>;

macro_rules! name_ordering {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'a> OptionBuilder<'a, $ty, NoCategories> {
                pub fn order_by_name(self) -> Self {
                    self.order_by_text()
                }

                pub fn order_by_name_descending(self) -> Self {
                    self.order_by_text_descending()
                }
            }
        )+
    };
}

name_ordering!(Month, Day, Gender, MaritalStatus);

macro_rules! number_ordering {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'a> OptionBuilder<'a, $ty, NoCategories> {
                /// Calendar order.
                pub fn order_by_number(self) -> Self {
                    self.order_by(|a, b| a.number.cmp(&b.number))
                }

                pub fn order_by_number_descending(self) -> Self {
                    self.order_by(|a, b| b.number.cmp(&a.number))
                }
            }
        )+
    };
}

number_ordering!(Month, Day);
