// crates/dropdowns-core/tests/regions.rs
use dropdowns_core::prelude::*;
use dropdowns_core::{CanadianProvince, MexicanState, UsState};

fn abbreviations<T: SelectOption>(items: &[&T]) -> Vec<String> {
    items.iter().map(|i| i.value().to_string()).collect()
}

#[test]
fn us_views_partition_the_table() {
    let us = dropdowns().us_states();
    assert_eq!(us.all().len(), 56);
    assert_eq!(us.states50().len(), 50);
    assert_eq!(us.states_and_dc().len(), 51);
    assert_eq!(us.territories().len(), 5);
    assert!(us.states_and_dc().iter().any(|s| s.is_dc));
}

#[test]
fn us_lookups_ignore_case_and_whitespace() {
    let us = dropdowns().us_states();
    let texas = us.by_abbreviation("TX").expect("texas");
    for q in [" tx ", "tx", "Tx", "\tTX\n"] {
        assert_eq!(us.by_abbreviation(q), Some(texas));
    }
    assert_eq!(us.by_name("  new YORK "), us.by_abbreviation("NY"));
    assert_eq!(us.by_abbreviation(""), None);
    assert_eq!(us.by_abbreviation("   "), None);
    assert_eq!(us.by_abbreviation("ZZ"), None);
}

#[test]
fn us_builder_defaults_to_the_fifty_states() {
    let built = dropdowns().us_states().builder().build();
    assert_eq!(built.len(), 50);
    assert!(built.iter().all(|s: &&UsState| s.is_state()));
}

#[test]
fn us_builder_switches_combine() {
    let us = dropdowns().us_states();

    assert_eq!(us.builder().include_dc().build().len(), 51);
    assert_eq!(us.builder().include_territories().build().len(), 55);
    assert_eq!(us.builder().include_all().build().len(), 56);

    let only_dc = us.builder().exclude_states().include_dc().build();
    assert_eq!(abbreviations(&only_dc), ["DC"]);

    let outlying = us.builder().exclude_states().include_territories().build();
    assert_eq!(abbreviations(&outlying), ["AS", "GU", "MP", "PR", "VI"]);

    assert!(us.builder().exclude_states().build().is_empty());
}

#[test]
fn allow_list_reaches_a_territory() {
    let built = dropdowns().us_states().builder().only(["pr"]).build();
    assert_eq!(abbreviations(&built), ["PR"]);
}

#[test]
fn us_custom_list_from_the_readme() {
    let built = dropdowns()
        .us_states()
        .builder()
        .include_all()
        .exclude(["AS", "GU"])
        .order_by_name()
        .build();
    assert_eq!(built.len(), 54);
    assert_eq!(built[0].name, "Alabama");
    assert!(built.iter().all(|s| s.abbreviation != "GU"));
    assert!(built.windows(2).all(|w| w[0].name <= w[1].name));
}

#[test]
fn us_abbreviation_ordering_descends() {
    let built = dropdowns()
        .us_states()
        .builder()
        .order_by_abbreviation_descending()
        .build();
    assert_eq!(built[0].abbreviation, "WY");
    assert_eq!(built[49].abbreviation, "AK");
}

#[test]
fn canada_defaults_to_provinces() {
    let ca = dropdowns().canadian_provinces();
    assert_eq!(ca.all().len(), 13);
    assert_eq!(ca.provinces().len(), 10);
    assert_eq!(ca.territories().len(), 3);

    let built = ca.builder().build();
    assert_eq!(built.len(), 10);
    assert!(built.iter().all(|p: &&CanadianProvince| !p.is_territory));

    assert_eq!(ca.builder().include_territories().build().len(), 13);
    assert_eq!(ca.builder().include_all().build().len(), 13);

    let north = ca.builder().exclude_provinces().include_territories().build();
    assert_eq!(abbreviations(&north), ["NT", "NU", "YT"]);
}

#[test]
fn include_all_keeps_an_earlier_exclusion() {
    let north = dropdowns()
        .canadian_provinces()
        .builder()
        .exclude_provinces()
        .include_all()
        .build();
    assert_eq!(abbreviations(&north), ["NT", "NU", "YT"]);

    let outlying = dropdowns().us_states().builder().exclude_states().include_all().build();
    assert_eq!(outlying.len(), 6);
    assert!(outlying.iter().all(|s| !s.is_state()));
}

#[test]
fn canada_lookups() {
    let ca = dropdowns().canadian_provinces();
    assert_eq!(ca.by_abbreviation(" on ").map(|p| p.name), Some("Ontario"));
    assert_eq!(ca.by_name("yukon").map(|p| p.abbreviation), Some("YT"));
    assert!(ca.by_name("").is_none());
}

#[test]
fn mexico_keeps_cdmx_apart() {
    let mx = dropdowns().mexican_states();
    assert_eq!(mx.all().len(), 32);
    assert_eq!(mx.states().len(), 31);
    assert_eq!(mx.states_and_cdmx().len(), 32);

    let built = mx.builder().build();
    assert_eq!(built.len(), 31);
    assert!(built.iter().all(|s: &&MexicanState| !s.is_federal_district));

    let with_city = mx.builder().include_cdmx().build();
    assert_eq!(with_city.len(), 32);

    let city = mx.builder().exclude_states().include_cdmx().build();
    assert_eq!(abbreviations(&city), ["CMX"]);
}

#[test]
fn mexico_name_lookup_keeps_accents() {
    let mx = dropdowns().mexican_states();
    assert_eq!(mx.by_name("querétaro").map(|s| s.abbreviation), Some("QUE"));
    assert!(mx.by_name("Queretaro").is_none());
    assert_eq!(mx.by_abbreviation("cmx").map(|s| s.is_federal_district), Some(true));
}
