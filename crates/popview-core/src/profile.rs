// crates/popview-core/src/profile.rs

//! Age/sex projection of a single district row.

use crate::error::{PopError, Result};
use crate::model::DistrictRow;
use crate::variant::ColumnLayout;
use serde::{Deserialize, Serialize};

/// Per-age population of one district, split by sex.
///
/// Values are copied verbatim from the source cells; `male_by_age` need not
/// sum to `male_total` when the publisher rounds or caps the top age bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationProfile {
    pub district_name: String,
    /// Index = age in years, 0..=100 (the last bucket is "100 and over").
    pub male_by_age: Vec<i64>,
    pub female_by_age: Vec<i64>,
    pub male_total: i64,
    pub female_total: i64,
    /// `male_total + female_total`.
    pub total_population: i64,
}

/// Projects `row` onto the fixed age/sex column block described by `layout`.
///
/// Fails with [`PopError::Shape`] when the row is narrower than the layout and
/// with [`PopError::Overflow`] when the two totals do not sum within `i64`.
pub fn extract(row: &DistrictRow, layout: &ColumnLayout) -> Result<PopulationProfile> {
    let expected = layout.min_columns();
    let found = row.source_width();
    if found < expected {
        return Err(PopError::Shape {
            district: row.name().to_string(),
            expected,
            found,
        });
    }

    let slice = |start: usize| -> Result<Vec<i64>> {
        (start..start + layout.ages)
            .map(|col| cell(row, col, expected))
            .collect()
    };

    let male_total = cell(row, layout.male_total, expected)?;
    let female_total = cell(row, layout.female_total, expected)?;
    let total_population = male_total
        .checked_add(female_total)
        .ok_or_else(|| PopError::Overflow {
            district: row.name().to_string(),
            detail: format!("{male_total} + {female_total} exceeds the i64 range"),
        })?;

    Ok(PopulationProfile {
        district_name: row.name().to_string(),
        male_by_age: slice(layout.male_ages_start)?,
        female_by_age: slice(layout.female_ages_start)?,
        male_total,
        female_total,
        total_population,
    })
}

// Column 0 (the name) has no numeric cell; a layout pointing there is a shape error too.
fn cell(row: &DistrictRow, column: usize, expected: usize) -> Result<i64> {
    row.source_cell(column).ok_or_else(|| PopError::Shape {
        district: row.name().to_string(),
        expected,
        found: row.source_width(),
    })
}

impl PopulationProfile {
    /// Series for a divergent pyramid: male counts as-is, female counts negated.
    ///
    /// `i64::MIN` has no negation and saturates to `i64::MAX`.
    pub fn pyramid_series(&self) -> (Vec<i64>, Vec<i64>) {
        (
            self.male_by_age.clone(),
            self.female_by_age.iter().map(|v| v.saturating_neg()).collect(),
        )
    }

    /// Saturating sum of the male per-age counts.
    pub fn male_age_sum(&self) -> i64 {
        saturating_sum(&self.male_by_age)
    }

    pub fn female_age_sum(&self) -> i64 {
        saturating_sum(&self.female_by_age)
    }

    /// Largest single per-age count across both sexes.
    pub fn peak(&self) -> i64 {
        self.male_by_age
            .iter()
            .chain(&self.female_by_age)
            .copied()
            .max()
            .unwrap_or(0)
    }
}

fn saturating_sum(values: &[i64]) -> i64 {
    values.iter().fold(0i64, |acc, v| acc.saturating_add(*v))
}

impl DistrictRow {
    /// See [`extract`].
    pub fn profile(&self, layout: &ColumnLayout) -> Result<PopulationProfile> {
        extract(self, layout)
    }
}
