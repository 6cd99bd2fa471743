//! Basic usage example for dropdowns-rs
//!
//! This example demonstrates how to:
//! - Read the built-in lists
//! - Look entries up by code or name
//! - Flatten any list to `{value, text}` pairs

use dropdowns_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Dropdowns-RS Basic Usage Example ===\n");
    let d = dropdowns();

    // Example 1: A full list
    println!("--- Example 1: US states (50 states, DC, territories) ---");
    let states = d.us_states().all();
    println!("Total entries: {}", states.len());
    for (i, state) in states.iter().take(5).enumerate() {
        println!("{}. {state}", i + 1);
    }
    println!("... and {} more\n", states.len() - 5);

    // Example 2: Named views
    println!("--- Example 2: Named views ---");
    println!("50 states:       {}", d.us_states().states50().len());
    println!("States and DC:   {}", d.us_states().states_and_dc().len());
    println!("Territories:     {}", d.us_states().territories().len());
    let answers: Vec<&str> = d.yes_no().with_na().iter().map(|o| o.name).collect();
    println!("Yes/No/N/A:      {answers:?}");
    println!();

    // Example 3: Lookups
    println!("--- Example 3: Lookups (trimmed, case-insensitive) ---");
    if let Some(country) = d.countries().by_alpha3_code(" deu ") {
        println!("DEU -> {} / {} / {}", country.name, country.alpha2, country.numeric_code);
    }
    if let Some(tz) = d.time_zones().by_iana_id("asia/kolkata") {
        println!("asia/kolkata -> {}", tz.text());
    }
    if let Some(month) = d.months().by_number(9) {
        println!("Month 9 -> value {:?}, text {:?}", month.value(), month.text());
    }
    println!();

    // Example 4: Flat options
    println!("--- Example 4: {{value, text}} pairs ---");
    for item in d.genders().options() {
        println!("<option value=\"{}\">{}</option>", item.value, item.text);
    }
    println!();

    // Example 5: Type-ahead
    println!("--- Example 5: Search ---");
    for state in d.mexican_states().search("quere") {
        println!("  {state}");
    }

    Ok(())
}
