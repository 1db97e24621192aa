// crates/popview-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file access, optional gzip, CP949 decoding) and
//! delegates to the CSV pass that normalizes headers and district names and
//! coerces every other column to integers.

use crate::error::{PopError, Result};
use crate::model::{DatasetPeriod, DistrictRow, Table};
use crate::text::{canonicalize_district, parse_count, strip_month_prefix};
use crate::variant::DatasetVariant;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod common_io;

/// Relative location of the monthly extract shipped next to the binary.
pub const DEFAULT_DATASET_PATH: &str = "data/202205.csv";

impl Table {
    pub fn default_dataset_path() -> PathBuf {
        PathBuf::from(DEFAULT_DATASET_PATH)
    }

    /// **Standard Loader:** reads, decodes and normalizes a monthly extract.
    ///
    /// The reference month is taken from the file name when it follows the
    /// `YYYYMM.csv` convention.
    pub fn load(path: impl AsRef<Path>, variant: &DatasetVariant) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), variant = %variant, "loading population table");

        let reader = common_io::open_stream(path)?;
        let table = Self::from_reader(reader, variant)?;
        Ok(table.with_period(DatasetPeriod::from_path(path)))
    }

    /// Loads from any byte stream in the variant's encoding.
    pub fn from_reader<R: Read>(mut reader: R, variant: &DatasetVariant) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(|e| {
            PopError::DataFormat(format!("failed to read dataset: {e}"))
        })?;
        let text = common_io::decode(&bytes, variant.encoding)?;
        Self::from_csv_str(&text, variant)
    }

    /// Parses already-decoded CSV text.
    pub fn from_csv_str(text: &str, variant: &DatasetVariant) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|h| strip_month_prefix(h, variant.month_token))
            .collect();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(PopError::DataFormat("missing header row".into()));
        }
        debug!(columns = headers.len(), "normalized headers");

        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result?;
            let row_no = idx + 1;

            let raw_name = record.get(0).unwrap_or_default();
            let name = canonicalize_district(raw_name, variant);

            let mut cells = Vec::with_capacity(record.len().saturating_sub(1));
            for (col, cell) in record.iter().enumerate().skip(1) {
                let value = parse_count(cell).ok_or_else(|| PopError::TypeCoercion {
                    row: row_no,
                    column: headers.get(col).cloned().unwrap_or_else(|| col.to_string()),
                    value: cell.to_string(),
                })?;
                cells.push(value);
            }

            rows.push(DistrictRow::new(name, cells));
        }

        info!(
            districts = rows.len(),
            columns = headers.len(),
            "population table ready"
        );
        Ok(Table::from_parts(headers, rows, *variant))
    }
}
