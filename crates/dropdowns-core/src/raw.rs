// crates/dropdowns-core/src/raw.rs

//! Row shapes of the literal tables in [`crate::data`].
//!
//! These mirror the tables one-to-one and are not part of the public API;
//! `model::convert` turns them into entities.

#[derive(Debug, Clone, Copy)]
pub struct CountryRaw {
    pub name: &'static str,
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: &'static str,
    pub continent: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct UsStateRaw {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub is_territory: bool,
    pub is_dc: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ProvinceRaw {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub is_territory: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct MexicanStateRaw {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub is_federal_district: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct MonthRaw {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub number: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct DayRaw {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub short_abbreviation: &'static str,
    pub number: u32,
}

/// Shared row shape for code-keyed tables (genders, marital statuses).
#[derive(Debug, Clone, Copy)]
pub struct CodedRaw {
    pub name: &'static str,
    pub code: &'static str,
    pub number: u32,
}

/// Shared row shape for categorized name parts (suffixes, prefix titles).
#[derive(Debug, Clone, Copy)]
pub struct TitleRaw {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub category: &'static str,
    pub number: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct YesNoRaw {
    pub name: &'static str,
    pub code: &'static str,
    pub number: u32,
    pub preset: &'static str,
}

/// Time zone row; the offset is the standard (non-DST) offset in minutes.
#[derive(Debug, Clone, Copy)]
pub struct TimeZoneRaw {
    pub iana_id: &'static str,
    pub windows_id: &'static str,
    pub display_name: &'static str,
    pub abbreviation: &'static str,
    pub abbreviation_dst: Option<&'static str>,
    pub utc_offset_minutes: i32,
    pub region: &'static str,
    pub observes_dst: bool,
}
