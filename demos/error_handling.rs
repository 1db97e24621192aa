//! Error handling demo for popview
//!
//! Shows the three failure paths a caller has to branch on: a bad dataset,
//! a query with no match, and a row too narrow for the age/sex layout.

use popview::prelude::*;

fn main() -> Result<()> {
    println!("=== popview Error Handling ===\n");

    // Example 1: Missing dataset
    println!("--- Example 1: Loading a missing file ---");
    match Table::load("data/does-not-exist.csv", &DatasetVariant::korean()) {
        Ok(_) => println!("✓ unexpectedly loaded"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: Non-numeric cell
    println!("--- Example 2: Type coercion failure ---");
    let csv = "Administrative district,2022year05month_Total\nSeoul (1100000000),n/a\n";
    match Table::from_csv_str(csv, &DatasetVariant::english()) {
        Ok(_) => println!("✓ unexpectedly parsed"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 3: No matching district
    println!("--- Example 3: Query without a match ---");
    let csv = "Administrative district,2022year05month_Total\nSeoul (1100000000),\"9,508,451\"\n";
    let table = Table::from_csv_str(csv, &DatasetVariant::english())?;
    for query in ["Seoul", "Busan"] {
        match table.resolve(query) {
            Resolution::Unique(row) => println!("  Found: {}", row.name()),
            Resolution::Ambiguous(rows) => println!("  {} candidates", rows.len()),
            Resolution::NotFound => println!("  No district matches '{query}'"),
        }
    }
    println!();

    // Example 4: Row narrower than the age/sex block
    println!("--- Example 4: Shape error ---");
    if let Some(row) = table.find_exact("Seoul") {
        match row.profile(&ColumnLayout::standard()) {
            Ok(p) => println!("  Total: {}", p.total_population),
            Err(e) => println!("  ✗ {e}"),
        }
    }

    Ok(())
}
