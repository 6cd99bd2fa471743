// crates/dropdowns-core/src/builder/time_zones.rs
use super::{OptionBuilder, TimeZoneFilter};
use crate::model::TimeZone;

/// Builder over [`TimeZone`]: region sets, a DST switch and offset ordering.
///
/// # Examples
/// ```
/// use dropdowns_core::dropdowns;
///
/// let zones = dropdowns()
///     .time_zones()
///     .builder()
///     .in_region(["Americas"])
///     .with_dst_only()
///     .order_by_offset()
///     .build();
///
/// assert!(zones.iter().all(|tz| tz.region == "Americas" && tz.observes_dst));
/// assert!(zones.windows(2).all(|w| w[0].utc_offset_minutes <= w[1].utc_offset_minutes));
/// ```
pub type TimeZonesBuilder<'a> = OptionBuilder<'a, TimeZone, TimeZoneFilter>;

impl<'a> OptionBuilder<'a, TimeZone, TimeZoneFilter> {
    pub fn in_region<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter_mut().regions.included.extend(regions);
        self
    }

    pub fn exclude_region<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter_mut().regions.excluded.extend(regions);
        self
    }

    /// Keeps zones that observe daylight saving. Overrides `without_dst`.
    pub fn with_dst_only(mut self) -> Self {
        self.filter_mut().observes_dst = Some(true);
        self
    }

    /// Keeps zones that never shift. Overrides `with_dst_only`.
    pub fn without_dst(mut self) -> Self {
        self.filter_mut().observes_dst = Some(false);
        self
    }

    /// West to east by standard offset.
    pub fn order_by_offset(self) -> Self {
        self.order_by(|a, b| a.utc_offset_minutes.cmp(&b.utc_offset_minutes))
    }

    pub fn order_by_offset_descending(self) -> Self {
        self.order_by(|a, b| b.utc_offset_minutes.cmp(&a.utc_offset_minutes))
    }

    pub fn order_by_name(self) -> Self {
        self.order_by_text()
    }

    pub fn order_by_name_descending(self) -> Self {
        self.order_by_text_descending()
    }

    pub fn order_by_iana_id(self) -> Self {
        self.order_by_value()
    }

    pub fn order_by_iana_id_descending(self) -> Self {
        self.order_by_value_descending()
    }
}
