// crates/popview-core/src/variant.rs

//! # Dataset Variants
//!
//! The monthly resident-registration extract is published with either Korean
//! or English column names. The parsing rules are identical; only a handful of
//! literals differ, so they live here as data instead of being baked into the
//! normalizer.

use crate::error::PopError;
use encoding_rs::{Encoding, EUC_KR};
use std::fmt;
use std::str::FromStr;

// -----------------------------------------------------------------------------
// LANGUAGE VARIANT
// -----------------------------------------------------------------------------

/// Literals that distinguish one dataset language variant from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetVariant {
    /// Short identifier used on the command line (`ko`, `en`).
    pub code: &'static str,
    /// Month token preceding `_` in every per-month header, e.g. `2022년05월_계_0세`.
    pub month_token: &'static str,
    /// Suffix marking a city token (`수원시`).
    pub city_marker: &'static str,
    /// Suffix marking a district token (`장안구`).
    pub district_marker: &'static str,
    /// Token appended to names that aggregate all sub-districts of a city.
    pub whole_area_label: &'static str,
    /// Text encoding of the source file.
    pub encoding: &'static Encoding,
}

impl DatasetVariant {
    pub fn korean() -> Self {
        Self {
            code: "ko",
            month_token: "월",
            city_marker: "시",
            district_marker: "구",
            whole_area_label: "전체",
            encoding: EUC_KR,
        }
    }

    /// The English export is CP949-encoded like the Korean one.
    pub fn english() -> Self {
        Self {
            code: "en",
            month_token: "month",
            city_marker: "City",
            district_marker: "Gu",
            whole_area_label: "all",
            encoding: EUC_KR,
        }
    }
}

impl Default for DatasetVariant {
    fn default() -> Self {
        Self::korean()
    }
}

impl FromStr for DatasetVariant {
    type Err = PopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" | "kr" | "korean" => Ok(Self::korean()),
            "en" | "english" => Ok(Self::english()),
            other => Err(PopError::InvalidVariant(other.to_string())),
        }
    }
}

impl fmt::Display for DatasetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

// -----------------------------------------------------------------------------
// COLUMN LAYOUT
// -----------------------------------------------------------------------------

/// Fixed source-column positions of the age/sex block.
///
/// These offsets are part of the file-format contract of the monthly extract;
/// header names are not consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub district: usize,
    pub male_total: usize,
    /// First male per-age column (age 0).
    pub male_ages_start: usize,
    pub female_total: usize,
    /// First female per-age column (age 0).
    pub female_ages_start: usize,
    /// Number of per-age columns for each sex (ages 0..=100).
    pub ages: usize,
}

impl ColumnLayout {
    pub const fn standard() -> Self {
        Self {
            district: 0,
            male_total: 1,
            male_ages_start: 3,
            female_total: 104,
            female_ages_start: 106,
            ages: 101,
        }
    }

    /// Minimum number of source columns a row needs for this layout.
    pub fn min_columns(&self) -> usize {
        [
            self.district + 1,
            self.male_total + 1,
            self.male_ages_start + self.ages,
            self.female_total + 1,
            self.female_ages_start + self.ages,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::standard()
    }
}
