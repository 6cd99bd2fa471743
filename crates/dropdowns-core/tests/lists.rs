// crates/dropdowns-core/tests/lists.rs
use dropdowns_core::prelude::*;

fn values<T: SelectOption>(items: &[&T]) -> Vec<String> {
    items.iter().map(|i| i.value().to_string()).collect()
}

#[test]
fn months_use_padded_values() {
    let months = dropdowns().months();
    assert_eq!(months.all().len(), 12);
    let jan = months.by_number(1).expect("january");
    assert_eq!((jan.value(), jan.text()), ("01", "January"));
    assert_eq!(months.by_name(" DECEMBER").map(|m| m.number), Some(12));
    assert_eq!(months.by_abbreviation("sep").map(|m| m.value()), Some("09"));
    assert!(months.by_number(0).is_none());
    assert!(months.by_number(13).is_none());
}

#[test]
fn month_orderings() {
    let months = dropdowns().months();
    let by_name = months.builder().order_by_name().build();
    assert_eq!(by_name[0].name, "April");

    let back = months.builder().order_by_name().order_by_number_descending().build();
    assert_eq!(back[0].number, 12);
    assert_eq!(back[11].number, 1);

    let q1 = months.builder().only(["01", "02", "03"]).build();
    assert_eq!(values(&q1), ["01", "02", "03"]);
}

#[test]
fn days_start_on_sunday() {
    let days = dropdowns().days();
    assert_eq!(days.all()[0].name, "Sunday");
    assert_eq!(days.by_number(0).map(|d| d.value()), Some("0"));
    assert_eq!(days.by_short_abbreviation("tu").map(|d| d.name), Some("Tuesday"));
    assert_eq!(days.by_abbreviation("FRI").map(|d| d.number), Some(5));
    assert_eq!(days.by_name("saturday").map(|d| d.is_weekend()), Some(true));

    let weekdays = days.builder().exclude(["0", "6"]).build();
    assert_eq!(weekdays.len(), 5);
    assert!(weekdays.iter().all(|d| !d.is_weekend()));
}

#[test]
fn coded_lists() {
    let genders = dropdowns().genders();
    assert_eq!(genders.by_code("f").map(|g| g.name), Some("Female"));
    assert_eq!(genders.by_number(3).map(|g| g.code), Some("U"));
    assert_eq!(genders.by_name("male").map(|g| g.code), Some("M"));

    let statuses = dropdowns().marital_statuses();
    assert_eq!(statuses.all().len(), 6);
    assert_eq!(statuses.by_code(" dp ").map(|s| s.name), Some("Domestic Partnership"));
    let sorted = statuses.builder().order_by_name_descending().build();
    assert_eq!(sorted[0].name, "Widowed");
}

#[test]
fn suffixes_show_abbreviations() {
    let suffixes = dropdowns().suffixes();
    let jr = suffixes.by_number(1).expect("junior");
    assert_eq!((jr.value(), jr.text()), ("1", "Jr."));
    assert_eq!(suffixes.by_abbreviation("phd").map(|s| s.number), Some(7));
    assert_eq!(suffixes.by_name("esquire").map(|s| s.abbreviation), Some("Esq."));
    assert_eq!(suffixes.categories(), ["Generational", "Academic", "Professional"]);
    assert_eq!(suffixes.by_category("generational").len(), 6);

    let working = suffixes
        .builder()
        .in_category(["Professional"])
        .order_by_name()
        .build();
    let abbreviations: Vec<&str> = working.iter().map(|s| s.abbreviation).collect();
    assert_eq!(abbreviations, ["CFP", "CPA", "Esq.", "LPN", "PE", "RN"]);

    let no_academic = suffixes.builder().exclude_category(["academic"]).build();
    assert_eq!(no_academic.len(), 12);
}

#[test]
fn suffix_ordering_aliases_follow_text_and_value() {
    let suffixes = dropdowns().suffixes();

    let by_name = suffixes.builder().order_by_name().build();
    assert_eq!(by_name, suffixes.builder().order_by_text().build());
    let texts: Vec<&str> = by_name.iter().map(|s| s.text()).collect();
    assert!(texts.windows(2).all(|w| w[0] <= w[1]));

    let by_abbreviation = suffixes.builder().order_by_abbreviation().build();
    assert_eq!(by_abbreviation, suffixes.builder().order_by_value().build());
    let codes = values(&by_abbreviation);
    assert!(codes.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(codes[..3], ["1", "10", "11"]);

    let down = suffixes
        .builder()
        .in_category(["Generational"])
        .order_by_abbreviation_descending()
        .build();
    assert_eq!(values(&down), ["6", "5", "4", "3", "2", "1"]);

    let named_down = suffixes
        .builder()
        .in_category(["Generational"])
        .order_by_name_descending()
        .build();
    let labels: Vec<&str> = named_down.iter().map(|s| s.text()).collect();
    assert_eq!(labels, ["V", "Sr.", "Jr.", "IV", "III", "II"]);
}

#[test]
fn prefix_titles_are_keyed_by_number() {
    let titles = dropdowns().prefix_titles();
    let ms = titles.by_abbreviation("ms.").expect("ms");
    assert_eq!(ms.value(), "3");
    assert_eq!(ms.text(), ms.name);
    assert_eq!(titles.by_name("doctor").map(|t| t.number), Some(5));
    assert_eq!(titles.categories().len(), 4);

    let religious = titles.builder().in_category(["Religious"]).order_by_name().build();
    let names: Vec<&str> = religious.iter().map(|t| t.name).collect();
    assert_eq!(names, ["Father", "Reverend"]);
}

#[test]
fn yes_no_presets() {
    let yn = dropdowns().yes_no();
    assert_eq!(values(&yn.basic()), ["Y", "N"]);
    assert_eq!(values(&yn.with_na()), ["Y", "N", "NA"]);
    assert_eq!(values(&yn.with_unknown()), ["Y", "N", "U"]);
    assert_eq!(yn.by_code("na").map(|o| o.name), Some("N/A"));
    assert_eq!(yn.by_number(4).map(|o| o.code), Some("U"));
    assert_eq!(yn.by_name("yes").map(|o| o.code), Some("Y"));

    let basic = yn.builder().in_preset(["basic"]).build();
    assert_eq!(values(&basic), ["Y", "N"]);

    let extended = yn.builder().exclude_preset(["Basic"]).build();
    assert_eq!(values(&extended), ["NA", "U"]);
}

#[test]
fn yes_no_shortcuts_override_presets() {
    let yn = dropdowns().yes_no();
    let na = yn.builder().in_preset(["Extended"]).include_na().build();
    assert_eq!(values(&na), ["Y", "N", "NA"]);

    let unknown = yn.builder().include_unknown().order_by_name().build();
    let names: Vec<&str> = unknown.iter().map(|o| o.name).collect();
    assert_eq!(names, ["No", "Unknown", "Yes"]);
}
