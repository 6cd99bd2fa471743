// crates/dropdowns-core/src/provider/time_zones.rs
use super::{distinct, filter_by, find_by};
use crate::builder::TimeZonesBuilder;
use crate::model::{convert, TimeZone};

provider! {
    /// A curated list of common time zones, keyed by IANA id.
    ///
    /// Offsets are standard (non-DST) offsets; see [`TimeZone`].
    TimeZones => TimeZone, "time-zones", convert::time_zones, TimeZonesBuilder
}

impl TimeZones {
    /// Zones in `region`, table order. Blank or unknown → empty.
    pub fn by_region(&self, region: &str) -> Vec<&TimeZone> {
        filter_by(self.all(), region, |tz| tz.region)
    }

    /// Region names in order of first appearance.
    pub fn regions(&self) -> Vec<&'static str> {
        distinct(self.all(), |tz| tz.region)
    }

    pub fn by_iana_id(&self, id: &str) -> Option<&TimeZone> {
        find_by(self.all(), id, |tz| tz.iana_id)
    }

    /// First zone mapped to a Windows id; several IANA zones can share one.
    pub fn by_windows_id(&self, id: &str) -> Option<&TimeZone> {
        find_by(self.all(), id, |tz| tz.windows_id)
    }

    /// First zone with this standard abbreviation. Abbreviations are not unique.
    pub fn by_abbreviation(&self, abbreviation: &str) -> Option<&TimeZone> {
        find_by(self.all(), abbreviation, |tz| tz.abbreviation)
    }

    pub fn with_dst(&self) -> Vec<&TimeZone> {
        self.all().iter().filter(|tz| tz.observes_dst).collect()
    }

    pub fn without_dst(&self) -> Vec<&TimeZone> {
        self.all().iter().filter(|tz| !tz.observes_dst).collect()
    }
}
