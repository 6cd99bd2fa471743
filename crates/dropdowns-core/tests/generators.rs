// crates/dropdowns-core/tests/generators.rs
use chrono::{Datelike, Local};
use dropdowns_core::prelude::*;
use dropdowns_core::{NumberOption, Years};
use proptest::prelude::*;

fn numbers(list: &[NumberOption]) -> Vec<i32> {
    list.iter().map(|n| n.number).collect()
}

#[test]
fn number_ranges() -> Result<()> {
    let nums = dropdowns().numbers();
    assert_eq!(numbers(&nums.range(1, 10).build()?), (1..=10).collect::<Vec<_>>());
    assert_eq!(numbers(&nums.range(10, 1).build()?), (1..=10).collect::<Vec<_>>());
    assert_eq!(
        numbers(&nums.range(1, 10).descending().build()?),
        (1..=10).rev().collect::<Vec<_>>()
    );
    assert_eq!(numbers(&nums.range(1, 10).step(3).build()?), [1, 4, 7, 10]);
    assert_eq!(numbers(&nums.range(7, 7).step(4).build()?), [7]);
    Ok(())
}

#[test]
fn number_labels_are_decimal() -> Result<()> {
    let list = dropdowns().numbers().range(-2, 0).build()?;
    let items: Vec<OptionItem> = list.iter().map(OptionItem::from_option).collect();
    assert_eq!(items[0], OptionItem::new("-2", "-2"));
    Ok(())
}

#[test]
fn invalid_arguments_are_reported() {
    let step = dropdowns().numbers().range(1, 10).step(0).build().unwrap_err();
    assert_eq!(step.param(), Some("step"));
    assert!(dropdowns().numbers().range(1, 10).step(-5).build().is_err());

    let count = dropdowns().years().last(0).unwrap_err();
    assert_eq!(count.param(), Some("count"));
}

#[test]
fn last_years_end_at_the_current_year() -> Result<()> {
    let now = Local::now().year();
    let list = Years::new().last(5)?;
    let years: Vec<i32> = list.iter().map(|y| y.year).collect();
    assert_eq!(years, [now, now - 1, now - 2, now - 3, now - 4]);

    let next = dropdowns().years().next(2)?;
    assert_eq!(next[0].year, now);
    Ok(())
}

#[test]
fn year_range_descending() {
    let list = dropdowns().years().range(1990, 1993, Direction::Descending);
    let labels: Vec<&str> = list.iter().map(|y| y.value()).collect();
    assert_eq!(labels, ["1993", "1992", "1991", "1990"]);
}

proptest! {
    #[test]
    fn ranges_never_overshoot(start in -10_000i32..10_000, end in -10_000i32..10_000, step in 1i32..500) {
        let list = dropdowns().numbers().range(start, end).step(step).build().unwrap();
        let (min, max) = (start.min(end), start.max(end));

        prop_assert_eq!(list.first().map(|n| n.number), Some(min));
        prop_assert!(list.iter().all(|n| n.number <= max));
        prop_assert!(list.windows(2).all(|w| w[1].number - w[0].number == step));
        let last = list.last().map(|n| n.number).unwrap();
        prop_assert!(max - last < step);
    }

    #[test]
    fn descending_is_the_reverse(start in -1000i32..1000, end in -1000i32..1000, step in 1i32..50) {
        let nums = dropdowns().numbers();
        let mut up = numbers(&nums.range(start, end).step(step).build().unwrap());
        let down = numbers(&nums.range(start, end).step(step).descending().build().unwrap());
        up.reverse();
        prop_assert_eq!(up, down);
    }

    #[test]
    fn last_spans_exactly_count_years(current in 1i32..3000, count in 1i32..200) {
        let years = Years::with_current_year(current).last(count).unwrap();
        prop_assert_eq!(years.len(), count as usize);
        prop_assert_eq!(years[0].year, current);
        prop_assert!(years.windows(2).all(|w| w[0].year == w[1].year + 1));
    }
}
