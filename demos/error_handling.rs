//! Error handling example for dropdowns-rs
//!
//! Lookups never fail, they return `None`. Only the generators and the
//! dataset-by-name helpers report errors.

use dropdowns_rs::prelude::*;
use dropdowns_rs::Years;

fn main() -> Result<()> {
    println!("=== Dropdowns-RS Error Handling Example ===\n");
    let d = dropdowns();

    // Example 1: Missing and blank lookups
    println!("--- Example 1: Lookups that miss ---");
    for code in ["XX", "", "   ", "ABCD"] {
        match d.countries().by_alpha2_code(code) {
            Some(country) => println!("  Found: {country}"),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!();

    // Example 2: Invalid generator arguments
    println!("--- Example 2: Invalid step and count ---");
    match d.numbers().range(1, 10).step(0).build() {
        Ok(list) => println!("  {} numbers", list.len()),
        Err(e) => println!("  ✗ {e} (parameter: {:?})", e.param()),
    }
    match d.years().last(-3) {
        Ok(list) => println!("  {} years", list.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    match Years::with_current_year(i32::MAX).next(10) {
        Ok(list) => println!("  {} years", list.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 3: Dataset names
    println!("--- Example 3: Dataset names ---");
    for name in ["us_states", "TimeZones", "planets"] {
        match name.parse::<DatasetKind>() {
            Ok(kind) => println!("  {name} -> {kind}"),
            Err(DropdownError::UnknownDataset(n)) => println!("  ✗ unknown dataset {n:?}"),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
