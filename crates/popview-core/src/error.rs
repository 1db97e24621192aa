// crates/popview-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading a population table or projecting rows out of it.
///
/// A query that matches no district is *not* an error; see
/// [`Resolution::NotFound`](crate::search::Resolution::NotFound).
#[derive(Debug, Error)]
pub enum PopError {
    /// The dataset is missing, unreadable, not valid in the expected encoding,
    /// or not parseable as delimited text.
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// A cell outside the district column could not be read as a number.
    #[error("Type coercion error at row {row}, column '{column}': cannot parse {value:?} as a number")]
    TypeCoercion {
        row: usize,
        column: String,
        value: String,
    },

    /// A row carries fewer source columns than the column layout requires.
    #[error("Shape error for '{district}': expected at least {expected} columns, found {found}")]
    Shape {
        district: String,
        expected: usize,
        found: usize,
    },

    /// Derived arithmetic on loaded counts left the `i64` range.
    #[error("Overflow for '{district}': {detail}")]
    Overflow { district: String, detail: String },

    #[error("Unknown dataset variant: {0}")]
    InvalidVariant(String),
}

pub type Result<T> = std::result::Result<T, PopError>;

impl From<csv::Error> for PopError {
    fn from(e: csv::Error) -> Self {
        PopError::DataFormat(format!("CSV parse failed: {e}"))
    }
}

impl From<std::io::Error> for PopError {
    fn from(e: std::io::Error) -> Self {
        PopError::DataFormat(format!("I/O failure: {e}"))
    }
}
