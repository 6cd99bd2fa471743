// crates/dropdowns-core/src/lib.rs

//! # dropdowns-core
//!
//! Compiled-in reference data for select controls: countries, US states,
//! Canadian provinces, Mexican states, months, days, genders, marital
//! statuses, name suffixes and prefixes, time zones and yes/no answers,
//! plus generators for number and year lists.
//!
//! ```
//! use dropdowns_core::prelude::*;
//!
//! let provinces = dropdowns()
//!     .canadian_provinces()
//!     .builder()
//!     .include_territories()
//!     .order_by_name()
//!     .build();
//! assert_eq!(provinces.len(), 13);
//!
//! let items: Vec<OptionItem> = provinces.iter().map(|p| OptionItem::from_option(*p)).collect();
//! assert_eq!(items[0].value, "AB");
//! ```

pub mod api; // Flat {value, text} views
pub mod builder;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod provider;
pub mod registry;
pub mod text;
pub mod traits;
// Literal rows and their shapes
mod data;
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::api::{OptionItem, OptionQuery};
pub use crate::builder::{CategoryFilter, OptionBuilder, OrderBy};
pub use crate::error::{DropdownError, Result};
pub use crate::model::{
    CanadianProvince, Country, Day, Direction, Gender, MaritalStatus, MexicanState, Month,
    NumberOption, PrefixTitle, Suffix, TimeZone, UsState, YearOption, YesNo,
};
pub use crate::provider::{
    CanadianProvinces, Countries, Days, Genders, MaritalStatuses, MexicanStates, Months,
    NumberRange, Numbers, PrefixTitles, Suffixes, TimeZones, UsStates, Years, YesNoOptions,
};
pub use crate::registry::{dropdowns, DatasetKind, Dropdowns};
pub use crate::traits::{OptionMatch, OptionSource, SelectOption};
