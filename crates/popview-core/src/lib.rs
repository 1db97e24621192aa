// crates/popview-core/src/lib.rs

//! # popview-core
//!
//! Loader and lookup engine for the monthly resident population extract
//! (population by administrative district, age and sex).
//!
//! ```rust,no_run
//! use popview_core::prelude::*;
//!
//! # fn main() -> popview_core::Result<()> {
//! let table = Table::load("data/202205.csv", &DatasetVariant::korean())?;
//! match table.resolve("강남구") {
//!     Resolution::Unique(row) => {
//!         let profile = extract(row, &ColumnLayout::standard())?;
//!         println!("{}: {}", profile.district_name, profile.total_population);
//!     }
//!     Resolution::Ambiguous(rows) => println!("{} candidates", rows.len()),
//!     Resolution::NotFound => println!("no matching district"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod profile;
pub mod search;
pub mod text;
pub mod traits;
pub mod variant;

// Re-exports
pub use crate::error::{PopError, Result};
pub use crate::model::{DatasetPeriod, DistrictRow, Table, TableStats};
pub use crate::profile::{extract, PopulationProfile};
pub use crate::search::{resolve, Resolution};
pub use crate::variant::{ColumnLayout, DatasetVariant};
