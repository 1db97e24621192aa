// crates/popview-core/src/model.rs
use crate::text::is_whole_area;
use crate::traits::NameMatch;
use crate::variant::DatasetVariant;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The in-memory population table.
///
/// Built once by [`Table::load`] and never mutated afterwards; every query
/// borrows it immutably, so a single instance can be shared freely.
#[derive(Clone, Debug)]
pub struct Table {
    /// Normalized headers (month prefix removed), in source order.
    pub(crate) headers: Vec<String>,
    /// One row per administrative district, in source order.
    pub(crate) rows: Vec<DistrictRow>,
    pub(crate) variant: DatasetVariant,
    pub(crate) period: Option<DatasetPeriod>,
}

/// One administrative district.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictRow {
    /// Canonical district name.
    pub name: String,
    /// Numeric source columns. Source column `i` (for `i >= 1`) is `cells[i - 1]`.
    pub cells: Vec<i64>,
}

impl DistrictRow {
    pub fn new(name: impl Into<String>, cells: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of source columns this row was read from, district column included.
    pub fn source_width(&self) -> usize {
        self.cells.len() + 1
    }

    /// Value of a numeric source column (column 0 is the name and has no value).
    pub fn source_cell(&self, column: usize) -> Option<i64> {
        column
            .checked_sub(1)
            .and_then(|idx| self.cells.get(idx).copied())
    }
}

impl NameMatch for DistrictRow {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Simple aggregate statistics for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    pub districts: usize,
    pub columns: usize,
    pub whole_area_rows: usize,
}

/// Reference month of a monthly extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetPeriod {
    pub year: u16,
    pub month: u8,
}

impl DatasetPeriod {
    /// Reads the period from a file stem shaped `YYYYMM` (`data/202205.csv`).
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let name = path.as_ref().file_name()?.to_str()?;
        let stem = name.split('.').next()?;
        if stem.len() != 6 || !stem.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year = stem[..4].parse().ok()?;
        let month: u8 = stem[4..].parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }
}

impl std::fmt::Display for DatasetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Table {
    /// Assembles a table from already-normalized parts.
    pub fn from_parts(
        headers: Vec<String>,
        rows: Vec<DistrictRow>,
        variant: DatasetVariant,
    ) -> Self {
        Self {
            headers,
            rows,
            variant,
            period: None,
        }
    }

    pub fn with_period(mut self, period: Option<DatasetPeriod>) -> Self {
        self.period = period;
        self
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[DistrictRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn variant(&self) -> &DatasetVariant {
        &self.variant
    }

    pub fn period(&self) -> Option<DatasetPeriod> {
        self.period
    }

    pub fn district_names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.name())
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            districts: self.rows.len(),
            columns: self.headers.len(),
            whole_area_rows: self
                .rows
                .iter()
                .filter(|r| is_whole_area(r.name(), &self.variant))
                .count(),
        }
    }
}
