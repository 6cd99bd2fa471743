// crates/dropdowns-core/tests/countries.rs
use dropdowns_core::prelude::*;

#[test]
fn code_lookups_agree() {
    let countries = dropdowns().countries();
    let us = countries.by_alpha2_code("us").expect("US present");
    assert_eq!(us.name, "United States");
    assert_eq!(countries.by_alpha3_code(" usa "), Some(us));
    assert_eq!(countries.by_numeric_code("840"), Some(us));
    assert_eq!(countries.by_name("UNITED STATES"), Some(us));
    assert!(countries.by_numeric_code("84").is_none());
    assert!(countries.by_alpha2_code("").is_none());
}

#[test]
fn continents_cover_the_table() {
    let countries = dropdowns().countries();
    let continents = countries.continents();
    assert_eq!(continents.len(), 7);
    assert!(continents.contains(&"Antarctica"));

    let total: usize = continents
        .iter()
        .map(|c| countries.by_continent(c).len())
        .sum();
    assert_eq!(total, countries.all().len());
    assert!(countries.by_continent("Atlantis").is_empty());
    assert!(countries.by_continent("  ").is_empty());
}

#[test]
fn builder_filters_by_continent() {
    let countries = dropdowns().countries();
    let europe = countries
        .builder()
        .in_continent(["europe"])
        .exclude(["DE"])
        .order_by_name()
        .build();
    assert_eq!(europe.len(), countries.by_continent("Europe").len() - 1);
    assert!(europe.iter().all(|c| c.continent == "Europe" && c.alpha2 != "DE"));
    assert!(europe.windows(2).all(|w| w[0].name <= w[1].name));

    let americas = countries
        .builder()
        .in_continent(["North America", "South America"])
        .exclude_continent(["South America"])
        .build();
    assert!(americas.iter().all(|c| c.continent == "North America"));
}

#[test]
fn code_ordering_uses_alpha2() {
    let built = dropdowns().countries().builder().order_by_code().build();
    assert!(built.windows(2).all(|w| w[0].alpha2 <= w[1].alpha2));

    let reversed = dropdowns().countries().builder().order_by_code_descending().build();
    let mut expected = built.clone();
    expected.reverse();
    assert_eq!(reversed, expected);
}

#[test]
fn search_ignores_accents() {
    let hits = dropdowns().countries().search("cote d");
    assert!(hits.iter().any(|c| c.alpha2 == "CI"));
    assert!(dropdowns().countries().search("  ").is_empty());
}
