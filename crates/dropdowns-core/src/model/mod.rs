// crates/dropdowns-core/src/model/mod.rs

//! # Entities
//!
//! One plain, immutable record per dataset. String fields borrow from the
//! compiled-in tables; values and labels that have to be derived (zero
//! padded month numbers, time zone labels, ...) are computed once when the
//! dataset is materialized.

pub mod calendar;
pub mod convert;
pub mod country;
pub mod numeric;
pub mod person;
pub mod region;
pub mod time_zone;
pub mod yes_no;

pub use calendar::{Day, Month};
pub use country::Country;
pub use numeric::{Direction, NumberOption, YearOption};
pub use person::{Gender, MaritalStatus, PrefixTitle, Suffix};
pub use region::{CanadianProvince, MexicanState, UsState};
pub use time_zone::TimeZone;
pub use yes_no::YesNo;
