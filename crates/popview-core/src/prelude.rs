//! popview prelude: bring common types and traits into scope for demos.

pub use crate::error::{PopError, Result};
pub use crate::model::{DatasetPeriod, DistrictRow, Table, TableStats};
pub use crate::profile::{extract, PopulationProfile};
pub use crate::search::{resolve, Resolution};
pub use crate::text::{canonicalize_district, strip_month_prefix};
pub use crate::traits::NameMatch;
pub use crate::variant::{ColumnLayout, DatasetVariant};
