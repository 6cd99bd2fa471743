// crates/dropdowns-core/tests/datasets.rs
use dropdowns_core::loader::duplicate_values;
use dropdowns_core::prelude::*;

fn assert_unique<S: OptionSource>(name: &str, source: &S) {
    let dups = duplicate_values(source.all());
    assert!(dups.is_empty(), "{name} has duplicate values: {dups:?}");
}

#[test]
fn every_table_has_unique_values() {
    let d = dropdowns();
    assert_unique("countries", d.countries());
    assert_unique("us-states", d.us_states());
    assert_unique("canadian-provinces", d.canadian_provinces());
    assert_unique("mexican-states", d.mexican_states());
    assert_unique("months", d.months());
    assert_unique("days", d.days());
    assert_unique("genders", d.genders());
    assert_unique("marital-statuses", d.marital_statuses());
    assert_unique("suffixes", d.suffixes());
    assert_unique("prefix-titles", d.prefix_titles());
    assert_unique("time-zones", d.time_zones());
    assert_unique("yes-no", d.yes_no());
}

#[test]
fn all_returns_the_same_slice() {
    let d = dropdowns();
    assert!(std::ptr::eq(d.countries().all(), d.countries().all()));
    assert!(std::ptr::eq(d.time_zones().all(), d.time_zones().all()));
    assert!(std::ptr::eq(d.yes_no().all(), d.yes_no().all()));
}

#[test]
fn concurrent_first_access_sees_one_list() {
    let registry: &'static Dropdowns = Box::leak(Box::new(Dropdowns::new()));
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || registry.suffixes().all().as_ptr() as usize))
        .collect();
    let ptrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(ptrs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn registry_covers_every_dataset() {
    let d = dropdowns();
    for kind in DatasetKind::ALL {
        let all = d.all_options(kind);
        assert!(!all.is_empty(), "{kind} is empty");
        let first = &all[0];
        assert_eq!(d.lookup(kind, &first.value.to_lowercase()).as_ref(), Some(first));
        assert!(d.lookup(kind, "  ").is_none());
    }
}

#[test]
fn registry_search_and_query() {
    let d = dropdowns();
    let hits = d.search(DatasetKind::MexicanStates, "queretaro");
    assert_eq!(hits, [OptionItem::new("QUE", "Querétaro")]);

    let query = OptionQuery::new().exclude(["Y"]).order(OrderBy::TextDescending);
    let items = d.options(DatasetKind::YesNo, &query);
    let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, ["Unknown", "No", "N/A"]);
}

#[cfg(feature = "json")]
#[test]
fn json_output() -> Result<()> {
    let items = dropdowns().genders().options();
    let json = dropdowns_core::api::to_json(&items[..1])?;
    assert_eq!(json, r#"[{"value":"M","text":"Male"}]"#);
    Ok(())
}
