// crates/dropdowns-core/src/data/mod.rs

//! # Static Tables
//!
//! Literal reference rows, compiled into the binary. Rows are kept in the
//! order a select control should show them by default; the loader turns
//! them into model entities on first access.

mod canadian_provinces;
mod countries;
mod days;
mod genders;
mod marital_statuses;
mod mexican_states;
mod months;
mod prefix_titles;
mod suffixes;
mod time_zones;
mod us_states;
mod yes_no;

pub(crate) use canadian_provinces::CANADIAN_PROVINCES;
pub(crate) use countries::COUNTRIES;
pub(crate) use days::DAYS;
pub(crate) use genders::GENDERS;
pub(crate) use marital_statuses::MARITAL_STATUSES;
pub(crate) use mexican_states::MEXICAN_STATES;
pub(crate) use months::MONTHS;
pub(crate) use prefix_titles::PREFIX_TITLES;
pub(crate) use suffixes::SUFFIXES;
pub(crate) use time_zones::TIME_ZONES;
pub(crate) use us_states::US_STATES;
pub(crate) use yes_no::YES_NO;
