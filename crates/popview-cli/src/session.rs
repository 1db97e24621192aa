//! Interactive query loop: type a district, pick among candidates, see the chart.

use crate::chart::{render_report, ChartStyle, Labels};
use popview_core::{extract, ColumnLayout, DistrictRow, Resolution, Table};
use std::io::{BufRead, Write};
use tracing::warn;

pub struct Session<'a> {
    table: &'a Table,
    layout: ColumnLayout,
    style: ChartStyle,
    width: usize,
    labels: Labels,
}

impl<'a> Session<'a> {
    pub fn new(table: &'a Table, style: ChartStyle, width: usize) -> Self {
        Self {
            table,
            layout: ColumnLayout::standard(),
            style,
            width,
            labels: Labels::for_variant(table.variant()),
        }
    }

    /// Runs until end of input, an empty line, or `:q`.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> anyhow::Result<()> {
        loop {
            write!(out, "District name (empty line to quit): ")?;
            out.flush()?;
            let Some(query) = read_line(&mut input)? else {
                break;
            };
            if query.is_empty() || query == ":q" {
                break;
            }

            match self.table.resolve(&query) {
                Resolution::NotFound => writeln!(out, "No district matches '{query}'.")?,
                Resolution::Unique(row) => self.show(row, &mut out)?,
                Resolution::Ambiguous(rows) => {
                    writeln!(out, "{} districts match '{query}':", rows.len())?;
                    for (i, row) in rows.iter().enumerate() {
                        writeln!(out, "  [{}] {}", i + 1, row.name())?;
                    }
                    write!(out, "Select [1-{}]: ", rows.len())?;
                    out.flush()?;
                    let Some(choice) = read_line(&mut input)? else {
                        break;
                    };
                    let picked = choice
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| pick_candidate(self.table, &rows, n));
                    match picked {
                        Some(row) => self.show(row, &mut out)?,
                        None => writeln!(out, "Invalid selection '{choice}'.")?,
                    }
                }
            }
        }
        Ok(())
    }

    fn show<W: Write>(&self, row: &DistrictRow, out: &mut W) -> anyhow::Result<()> {
        match extract(row, &self.layout) {
            Ok(profile) => {
                let report = render_report(
                    &profile,
                    self.table.period(),
                    self.style,
                    self.width,
                    &self.labels,
                );
                writeln!(out, "{report}")?;
            }
            Err(e) => {
                warn!(district = row.name(), error = %e, "cannot project district row");
                writeln!(out, "Cannot display '{}': {e}", row.name())?;
            }
        }
        Ok(())
    }
}

/// Picks the 1-based `choice` among `candidates`.
///
/// The picked name is resolved again so that a name which prefixes others
/// (`서울특별시` in `서울특별시 강남구`) still lands on its own row. `None` when
/// `choice` is 0 or past the end.
pub fn pick_candidate<'a>(
    table: &'a Table,
    candidates: &[&'a DistrictRow],
    choice: usize,
) -> Option<&'a DistrictRow> {
    let candidate = *candidates.get(choice.checked_sub(1)?)?;
    Some(table.resolve(candidate.name()).unique().unwrap_or(candidate))
}

fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
