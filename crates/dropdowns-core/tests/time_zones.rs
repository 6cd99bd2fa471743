// crates/dropdowns-core/tests/time_zones.rs
use dropdowns_core::prelude::*;

#[test]
fn americas_with_dst_sorted_by_offset() {
    let zones = dropdowns()
        .time_zones()
        .builder()
        .in_region(["Americas"])
        .with_dst_only()
        .exclude(["America/Toronto"])
        .order_by_offset()
        .build();

    let ids: Vec<&str> = zones.iter().map(|tz| tz.iana_id).collect();
    assert_eq!(
        ids,
        [
            "America/Anchorage",
            "America/Los_Angeles",
            "America/Denver",
            "America/Chicago",
            "America/New_York",
            "America/Halifax",
        ]
    );
    assert!(zones.iter().all(|tz| tz.region == "Americas" && tz.observes_dst));
}

#[test]
fn dst_switch_is_last_writer_wins() {
    let tz = dropdowns().time_zones();
    let without = tz.builder().with_dst_only().without_dst().build();
    assert!(!without.is_empty());
    assert!(without.iter().all(|z| !z.observes_dst));
    assert_eq!(without.len(), tz.without_dst().len());
    assert_eq!(tz.with_dst().len() + tz.without_dst().len(), tz.all().len());
}

#[test]
fn region_sets_and_offset_descending() {
    let zones = dropdowns()
        .time_zones()
        .builder()
        .exclude_region(["americas", "ASIA"])
        .order_by_offset_descending()
        .build();
    assert!(zones.iter().all(|z| z.region != "Americas" && z.region != "Asia"));
    assert!(zones
        .windows(2)
        .all(|w| w[0].utc_offset_minutes >= w[1].utc_offset_minutes));
    // Equal offsets keep table order.
    let paris = zones.iter().position(|z| z.iana_id == "Europe/Paris");
    let berlin = zones.iter().position(|z| z.iana_id == "Europe/Berlin");
    assert!(paris < berlin);
}

#[test]
fn lookups() {
    let tz = dropdowns().time_zones();
    let kolkata = tz.by_iana_id("asia/kolkata").expect("kolkata");
    assert_eq!(kolkata.text(), "(UTC+05:30) Chennai, Kolkata, Mumbai, New Delhi");
    assert_eq!(kolkata.offset_label(), "+05:30");
    assert_eq!(
        kolkata.fixed_offset().map(|o| o.local_minus_utc()),
        Some(330 * 60)
    );

    assert_eq!(
        tz.by_windows_id("eastern standard time").map(|z| z.iana_id),
        Some("America/New_York")
    );
    assert_eq!(tz.by_abbreviation("cst").map(|z| z.iana_id), Some("America/Chicago"));
    assert!(tz.by_iana_id(" ").is_none());
}

#[test]
fn regions_are_listed_once() {
    let tz = dropdowns().time_zones();
    let regions = tz.regions();
    assert_eq!(regions[0], "Universal");
    assert_eq!(regions.len(), 7);
    let total: usize = regions.iter().map(|r| tz.by_region(r).len()).sum();
    assert_eq!(total, tz.all().len());
    assert_eq!(tz.by_region("americas").len(), 12);
}

#[test]
fn labels_carry_signed_offsets() {
    let tz = dropdowns().time_zones();
    let utc = tz.by_iana_id("Etc/UTC").expect("utc");
    assert!(utc.text().starts_with("(UTC+00:00)"));
    let la = tz.by_iana_id("America/Los_Angeles").expect("la");
    assert!(la.text().starts_with("(UTC-08:00)"));
}
