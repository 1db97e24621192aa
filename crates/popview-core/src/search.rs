// crates/popview-core/src/search.rs
use crate::model::{DistrictRow, Table};
use crate::traits::NameMatch;
use tracing::debug;

/// Outcome of a district lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Exactly one district matched.
    Unique(&'a DistrictRow),
    /// Several districts matched, in table order. Re-run [`resolve`] with one
    /// candidate's exact name to narrow it down.
    Ambiguous(Vec<&'a DistrictRow>),
    /// Nothing matched.
    NotFound,
}

impl<'a> Resolution<'a> {
    /// All matching rows, in table order.
    pub fn candidates(&self) -> Vec<&'a DistrictRow> {
        match self {
            Resolution::Unique(row) => vec![*row],
            Resolution::Ambiguous(rows) => rows.clone(),
            Resolution::NotFound => Vec::new(),
        }
    }

    pub fn unique(&self) -> Option<&'a DistrictRow> {
        match self {
            Resolution::Unique(row) => Some(*row),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound)
    }
}

/// Filters `table` to districts whose canonical name contains `query`.
///
/// Matching is a case-sensitive substring test. When several rows match but
/// exactly one of them is named `query` verbatim, that row wins: a city row
/// such as `서울특별시` is a substring of all of its district rows, and picking
/// a candidate by its exact name must settle the lookup.
pub fn resolve<'a>(query: &str, table: &'a Table) -> Resolution<'a> {
    if query.is_empty() {
        return Resolution::NotFound;
    }

    let matches: Vec<&DistrictRow> = table
        .rows()
        .iter()
        .filter(|r| r.name_contains(query))
        .collect();
    debug!(query, matches = matches.len(), "resolved district query");

    match matches.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Unique(matches[0]),
        _ => {
            let exact: Vec<&DistrictRow> = matches
                .iter()
                .copied()
                .filter(|r| r.is_named(query))
                .collect();
            if let [row] = exact.as_slice() {
                Resolution::Unique(*row)
            } else {
                Resolution::Ambiguous(matches)
            }
        }
    }
}

impl Table {
    /// See [`resolve`].
    pub fn resolve(&self, query: &str) -> Resolution<'_> {
        resolve(query, self)
    }

    /// Exact-name lookup; returns the first row named `name`.
    pub fn find_exact(&self, name: &str) -> Option<&DistrictRow> {
        self.rows().iter().find(|r| r.is_named(name))
    }

    /// All rows whose name contains `substr`, in table order.
    pub fn find_districts_by_substring(&self, substr: &str) -> Vec<&DistrictRow> {
        self.rows()
            .iter()
            .filter(|r| r.name_contains(substr))
            .collect()
    }
}
