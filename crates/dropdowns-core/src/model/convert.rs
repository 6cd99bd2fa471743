// crates/dropdowns-core/src/model/convert.rs

//! **Raw -> Model.** One converter per table, used as dataset initializers.

use super::time_zone::format_offset;
use super::{
    CanadianProvince, Country, Day, Gender, MaritalStatus, MexicanState, Month, PrefixTitle,
    Suffix, TimeZone, UsState, YesNo,
};
use crate::data;
use crate::raw::{
    CodedRaw, CountryRaw, DayRaw, MexicanStateRaw, MonthRaw, ProvinceRaw, TimeZoneRaw, TitleRaw,
    UsStateRaw, YesNoRaw,
};

impl From<&CountryRaw> for Country {
    fn from(raw: &CountryRaw) -> Self {
        Country {
            name: raw.name,
            alpha2: raw.alpha2,
            alpha3: raw.alpha3,
            numeric_code: raw.numeric,
            continent: raw.continent,
        }
    }
}

impl From<&UsStateRaw> for UsState {
    fn from(raw: &UsStateRaw) -> Self {
        UsState {
            name: raw.name,
            abbreviation: raw.abbreviation,
            is_territory: raw.is_territory,
            is_dc: raw.is_dc,
        }
    }
}

impl From<&ProvinceRaw> for CanadianProvince {
    fn from(raw: &ProvinceRaw) -> Self {
        CanadianProvince {
            name: raw.name,
            abbreviation: raw.abbreviation,
            is_territory: raw.is_territory,
        }
    }
}

impl From<&MexicanStateRaw> for MexicanState {
    fn from(raw: &MexicanStateRaw) -> Self {
        MexicanState {
            name: raw.name,
            abbreviation: raw.abbreviation,
            is_federal_district: raw.is_federal_district,
        }
    }
}

impl From<&MonthRaw> for Month {
    fn from(raw: &MonthRaw) -> Self {
        Month {
            name: raw.name,
            abbreviation: raw.abbreviation,
            number: raw.number,
            value: format!("{:02}", raw.number),
        }
    }
}

impl From<&DayRaw> for Day {
    fn from(raw: &DayRaw) -> Self {
        Day {
            name: raw.name,
            abbreviation: raw.abbreviation,
            short_abbreviation: raw.short_abbreviation,
            number: raw.number,
            value: raw.number.to_string(),
        }
    }
}

impl From<&CodedRaw> for Gender {
    fn from(raw: &CodedRaw) -> Self {
        Gender {
            name: raw.name,
            code: raw.code,
            number: raw.number,
        }
    }
}

impl From<&CodedRaw> for MaritalStatus {
    fn from(raw: &CodedRaw) -> Self {
        MaritalStatus {
            name: raw.name,
            code: raw.code,
            number: raw.number,
        }
    }
}

impl From<&TitleRaw> for Suffix {
    fn from(raw: &TitleRaw) -> Self {
        Suffix {
            name: raw.name,
            abbreviation: raw.abbreviation,
            category: raw.category,
            number: raw.number,
            value: raw.number.to_string(),
        }
    }
}

impl From<&TitleRaw> for PrefixTitle {
    fn from(raw: &TitleRaw) -> Self {
        PrefixTitle {
            name: raw.name,
            abbreviation: raw.abbreviation,
            category: raw.category,
            number: raw.number,
            value: raw.number.to_string(),
        }
    }
}

impl From<&YesNoRaw> for YesNo {
    fn from(raw: &YesNoRaw) -> Self {
        YesNo {
            name: raw.name,
            code: raw.code,
            number: raw.number,
            preset: raw.preset,
        }
    }
}

impl From<&TimeZoneRaw> for TimeZone {
    fn from(raw: &TimeZoneRaw) -> Self {
        TimeZone {
            iana_id: raw.iana_id,
            windows_id: raw.windows_id,
            display_name: raw.display_name,
            abbreviation: raw.abbreviation,
            abbreviation_dst: raw.abbreviation_dst,
            utc_offset_minutes: raw.utc_offset_minutes,
            region: raw.region,
            observes_dst: raw.observes_dst,
            text: format!(
                "(UTC{}) {}",
                format_offset(raw.utc_offset_minutes),
                raw.display_name
            ),
        }
    }
}

fn convert_all<'r, R: 'r, T>(rows: &'r [R]) -> Vec<T>
where
    T: From<&'r R>,
{
    rows.iter().map(T::from).collect()
}

// -----------------------------------------------------------------------------
// DATASET INITIALIZERS
// -----------------------------------------------------------------------------

pub(crate) fn countries() -> Vec<Country> {
    convert_all(data::COUNTRIES)
}

pub(crate) fn us_states() -> Vec<UsState> {
    convert_all(data::US_STATES)
}

pub(crate) fn canadian_provinces() -> Vec<CanadianProvince> {
    convert_all(data::CANADIAN_PROVINCES)
}

pub(crate) fn mexican_states() -> Vec<MexicanState> {
    convert_all(data::MEXICAN_STATES)
}

pub(crate) fn months() -> Vec<Month> {
    convert_all(data::MONTHS)
}

pub(crate) fn days() -> Vec<Day> {
    convert_all(data::DAYS)
}

pub(crate) fn genders() -> Vec<Gender> {
    convert_all(data::GENDERS)
}

pub(crate) fn marital_statuses() -> Vec<MaritalStatus> {
    convert_all(data::MARITAL_STATUSES)
}

pub(crate) fn suffixes() -> Vec<Suffix> {
    convert_all(data::SUFFIXES)
}

pub(crate) fn prefix_titles() -> Vec<PrefixTitle> {
    convert_all(data::PREFIX_TITLES)
}

pub(crate) fn time_zones() -> Vec<TimeZone> {
    convert_all(data::TIME_ZONES)
}

pub(crate) fn yes_no() -> Vec<YesNo> {
    convert_all(data::YES_NO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SelectOption;

    #[test]
    fn month_values_are_zero_padded() {
        let months = months();
        assert_eq!(months[0].value(), "01");
        assert_eq!(months[11].value(), "12");
    }

    #[test]
    fn time_zone_text_carries_the_offset() {
        let zones = time_zones();
        let kolkata = zones.iter().find(|z| z.iana_id == "Asia/Kolkata").unwrap();
        assert_eq!(kolkata.text(), "(UTC+05:30) Chennai, Kolkata, Mumbai, New Delhi");
    }
}
