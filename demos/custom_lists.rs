//! Custom lists with the builder
//!
//! This example demonstrates how to:
//! - Widen or narrow a dataset through its categories
//! - Combine allow-lists, exclusions and ordering
//! - Generate number and year lists

use dropdowns_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Dropdowns-RS Custom Lists Example ===\n");
    let d = dropdowns();

    println!("--- Example 1: States and DC, without Alaska and Hawaii ---");
    let contiguous = d
        .us_states()
        .builder()
        .include_dc()
        .exclude(["AK", "HI"])
        .order_by_name()
        .build();
    if let (Some(first), Some(last)) = (contiguous.first(), contiguous.last()) {
        println!("{} entries, first {first}, last {last}\n", contiguous.len());
    }

    println!("--- Example 2: DST-observing zones in the Americas, west to east ---");
    let zones = d
        .time_zones()
        .builder()
        .in_region(["Americas"])
        .with_dst_only()
        .exclude(["America/Toronto"])
        .order_by_offset()
        .build();
    for tz in &zones {
        println!("  {:<22} {}", tz.iana_id, tz.text());
    }
    println!();

    println!("--- Example 3: Allow-list beats category defaults ---");
    let picked = d.canadian_provinces().builder().only(["YT", "BC"]).order_by_name().build();
    for p in picked {
        println!("  {p}");
    }
    println!();

    println!("--- Example 4: European countries, Z to A ---");
    let europe = d
        .countries()
        .builder()
        .in_continent(["Europe"])
        .order_by_name_descending()
        .build();
    for c in europe.iter().take(5) {
        println!("  {c}");
    }
    println!();

    println!("--- Example 5: Dataset-agnostic query ---");
    let query = OptionQuery::new().exclude(["U"]).order(OrderBy::Text);
    for item in d.options(DatasetKind::Genders, &query) {
        println!("  {} = {}", item.value, item.text);
    }
    println!();

    println!("--- Example 6: Generated lists ---");
    let tens = d.numbers().range(0, 100).step(10).descending().build()?;
    println!("  {}", tens.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" "));
    let years = d.years().last(5)?;
    println!("  {}", years.iter().map(|y| y.to_string()).collect::<Vec<_>>().join(" "));

    Ok(())
}
