//! Basic usage demo for popview
//!
//! This demo shows how to:
//! - Load a monthly extract
//! - Look up districts by substring
//! - Project a district onto its age/sex profile
//!
//! Run with `cargo run --example basic_usage -- data/202205.csv`.

use popview::prelude::*;

fn main() -> Result<()> {
    println!("=== popview Basic Usage ===\n");

    let path = std::env::args()
        .nth(1)
        .map(Into::into)
        .unwrap_or_else(Table::default_dataset_path);

    println!("Loading {}...", path.display());
    let table = Table::load(&path, &DatasetVariant::korean())?;
    println!("✓ Loaded {} districts\n", table.len());

    // Example 1: Table summary
    println!("--- Example 1: Table summary ---");
    let stats = table.stats();
    if let Some(period) = table.period() {
        println!("Period: {period}");
    }
    println!("Columns: {}", stats.columns);
    println!("Whole-area rows: {}\n", stats.whole_area_rows);

    // Example 2: First few districts
    println!("--- Example 2: First districts ---");
    for (i, name) in table.district_names().take(5).enumerate() {
        println!("{}. {name}", i + 1);
    }
    println!();

    // Example 3: Resolve a query and pick the first candidate
    println!("--- Example 3: Resolve '강남구' ---");
    let row = match table.resolve("강남구") {
        Resolution::Unique(row) => Some(row),
        Resolution::Ambiguous(rows) => {
            println!("{} candidates, using the first", rows.len());
            table.resolve(rows[0].name()).unique()
        }
        Resolution::NotFound => None,
    };

    match row {
        Some(row) => {
            let profile = extract(row, &ColumnLayout::standard())?;
            println!("District: {}", profile.district_name);
            println!("Total: {}", profile.total_population);
            println!("Male: {}  Female: {}", profile.male_total, profile.female_total);
            println!("Age 0 (m/f): {}/{}", profile.male_by_age[0], profile.female_by_age[0]);
        }
        None => println!("No district matches '강남구'"),
    }

    Ok(())
}
