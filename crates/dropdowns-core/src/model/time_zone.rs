// crates/dropdowns-core/src/model/time_zone.rs
use crate::traits::SelectOption;
use chrono::FixedOffset;
use serde::Serialize;
use std::fmt;

/// A time zone entry.
///
/// This is static reference data: `utc_offset_minutes` is the standard
/// offset and `observes_dst` only says whether the zone shifts at some
/// point of the year. No transition rules are modelled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TimeZone {
    pub iana_id: &'static str,
    pub windows_id: &'static str,
    pub display_name: &'static str,
    pub abbreviation: &'static str,
    pub abbreviation_dst: Option<&'static str>,
    /// Standard offset from UTC, in minutes (east positive).
    pub utc_offset_minutes: i32,
    /// `Americas`, `Europe`, `Asia`, `Africa`, `Pacific`, `Atlantic` or `Universal`.
    pub region: &'static str,
    pub observes_dst: bool,
    #[serde(skip)]
    pub(crate) text: String,
}

impl TimeZone {
    /// The standard offset as a chrono offset.
    pub fn fixed_offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
    }

    /// `"+05:30"`, `"-08:00"`, `"+00:00"`.
    pub fn offset_label(&self) -> String {
        format_offset(self.utc_offset_minutes)
    }
}

/// Formats an offset in minutes as `±HH:MM`; zero is written as `+00:00`.
pub(crate) fn format_offset(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let abs = minutes.unsigned_abs();
    format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
}

impl SelectOption for TimeZone {
    fn value(&self) -> &str {
        self.iana_id
    }

    fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.iana_id)
    }
}

#[cfg(test)]
mod tests {
    use super::format_offset;

    #[test]
    fn offsets_always_carry_a_sign() {
        assert_eq!(format_offset(0), "+00:00");
        assert_eq!(format_offset(330), "+05:30");
        assert_eq!(format_offset(-300), "-05:00");
        assert_eq!(format_offset(-30), "-00:30");
        assert_eq!(format_offset(-210), "-03:30");
    }
}
