// crates/dropdowns-core/tests/builder.rs
use dropdowns_core::prelude::*;
use dropdowns_core::Country;
use proptest::prelude::*;

fn values<T: SelectOption>(items: &[&T]) -> Vec<String> {
    items.iter().map(|i| i.value().to_string()).collect()
}

#[test]
fn build_is_deterministic() {
    let builder = dropdowns()
        .countries()
        .builder()
        .in_continent(["Asia"])
        .order_by_name_descending();
    assert_eq!(builder.build(), builder.build());
}

#[test]
fn exclusion_applies_under_an_allow_list() {
    let built = dropdowns()
        .countries()
        .builder()
        .only(["FR", "DE"])
        .exclude(["de"])
        .build();
    assert_eq!(values(&built), ["FR"]);
}

#[test]
fn repeated_exclusions_accumulate_as_a_set() {
    let once = dropdowns().genders().builder().exclude(["U"]).build();
    let twice = dropdowns()
        .genders()
        .builder()
        .exclude(["U"])
        .exclude(["u", " U "])
        .build();
    assert_eq!(once, twice);
    assert_eq!(values(&once), ["M", "F"]);
}

#[test]
fn blank_and_empty_inputs_are_no_ops() {
    let baseline = dropdowns().months().builder().build();
    let none: [&str; 0] = [];
    let blank = dropdowns()
        .months()
        .builder()
        .exclude(none)
        .exclude(["", "   "])
        .only(["  "])
        .build();
    assert_eq!(baseline, blank);
}

#[test]
fn value_ordering_reverses_exactly() {
    let up = dropdowns().marital_statuses().builder().order_by_value().build();
    let down = dropdowns()
        .marital_statuses()
        .builder()
        .order_by_value_descending()
        .build();
    assert_eq!(values(&up), ["D", "DP", "M", "S", "SP", "W"]);
    let mut reversed = up.clone();
    reversed.reverse();
    assert_eq!(down, reversed);
}

#[test]
fn last_ordering_wins() {
    let last_desc = dropdowns()
        .genders()
        .builder()
        .order_by_value()
        .order_by_value_descending()
        .build();
    assert_eq!(values(&last_desc), ["U", "M", "F"]);
}

#[test]
fn order_enum_and_custom_comparators() {
    let by_enum = dropdowns().days().builder().order(OrderBy::Text).build();
    assert_eq!(by_enum[0].name, "Friday");

    let by_len = dropdowns()
        .days()
        .builder()
        .order_by(|a, b| a.name.len().cmp(&b.name.len()))
        .build();
    // Stable: Sunday, Monday and Friday share the shortest length.
    let names: Vec<&str> = by_len.iter().take(3).map(|d| d.name).collect();
    assert_eq!(names, ["Sunday", "Monday", "Friday"]);
}

fn alpha2_codes() -> Vec<&'static str> {
    dropdowns().countries().all().iter().map(|c| c.alpha2).collect()
}

proptest! {
    #[test]
    fn allow_list_result_is_subset_minus_exclusions(
        picks in proptest::sample::subsequence(alpha2_codes(), 0..20),
        drops in proptest::sample::subsequence(alpha2_codes(), 0..20),
    ) {
        let built = dropdowns()
            .countries()
            .builder()
            .only(&picks)
            .exclude(&drops)
            .build();

        let expected: Vec<&Country> = dropdowns()
            .countries()
            .all()
            .iter()
            .filter(|c| (picks.is_empty() || picks.contains(&c.alpha2)) && !drops.contains(&c.alpha2))
            .collect();
        prop_assert_eq!(built, expected);
    }

    #[test]
    fn lookups_ignore_case_and_padding(idx in 0usize..200, pad in "[ \t]{0,3}", upper in any::<bool>()) {
        let countries = dropdowns().countries();
        let country = &countries.all()[idx % countries.all().len()];
        let code = if upper { country.alpha2.to_uppercase() } else { country.alpha2.to_lowercase() };
        let query = format!("{pad}{code}{pad}");
        prop_assert_eq!(countries.by_alpha2_code(&query), Some(country));
    }
}
