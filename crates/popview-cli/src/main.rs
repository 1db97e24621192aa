//! popview — terminal viewer for popview-core
//!
//! Loads a monthly resident population extract (population by
//! administrative district, age and sex) and shows totals plus an age chart
//! for a chosen district.
//!
//! Usage examples
//! --------------
//!
//! - Show table statistics
//!   $ popview stats
//!
//! - List districts (optionally only those containing a substring)
//!   $ popview districts
//!   $ popview districts 수원시
//!
//! - Show one district; ambiguous queries list their candidates
//!   $ popview show 해운대구
//!   $ popview show 강남 --pick 2
//!   $ popview show 해운대구 --json
//!
//! - Interactive prompt (the default)
//!   $ popview --chart bars
//!
//! Data source
//! -----------
//!
//! By default the extract is read from `data/202205.csv` relative to the
//! working directory. Use `--input <path>` for another month and
//! `--variant en` for the English-header export. Set `RUST_LOG=debug` to
//! trace loading and lookups on stderr.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use popview_cli::chart::{render_report, ChartStyle, Labels};
use popview_cli::session::{pick_candidate, Session};
use popview_core::{extract, ColumnLayout, Resolution, Table};
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();

    let input_path = args
        .input
        .clone()
        .unwrap_or_else(|| Table::default_dataset_path().to_string_lossy().to_string());

    // Load once; everything below only borrows the table.
    let table = Table::load(&input_path, &args.variant)
        .with_context(|| format!("failed to load {input_path}"))?;
    info!(districts = table.len(), "table loaded");

    let style = args
        .chart
        .unwrap_or_else(|| ChartStyle::default_for(&args.variant));
    let labels = Labels::for_variant(&args.variant);

    match args.command.unwrap_or(Commands::Interactive) {
        Commands::Stats => {
            let stats = table.stats();
            println!("Table statistics:");
            if let Some(p) = table.period() {
                println!("  Period: {p}");
            }
            println!("  Variant: {}", table.variant());
            println!("  Districts: {}", stats.districts);
            println!("  Columns: {}", stats.columns);
            println!("  Whole-area rows: {}", stats.whole_area_rows);
        }

        Commands::Districts { filter } => {
            let rows = match filter.as_deref() {
                Some(f) => table.find_districts_by_substring(f),
                None => table.rows().iter().collect(),
            };
            if rows.is_empty() {
                println!("No districts found.");
            }
            for row in rows {
                println!("{}", row.name());
            }
        }

        Commands::Show { query, pick, json } => {
            let row = match table.resolve(&query) {
                Resolution::Unique(row) => row,
                Resolution::NotFound => bail!("No district matches '{query}'"),
                Resolution::Ambiguous(rows) => match pick {
                    Some(n) => match pick_candidate(&table, &rows, n) {
                        Some(row) => row,
                        None => bail!("--pick {n} is out of range (1-{})", rows.len()),
                    },
                    None => {
                        println!("{} districts match '{query}':", rows.len());
                        for (i, row) in rows.iter().enumerate() {
                            println!("  [{}] {}", i + 1, row.name());
                        }
                        bail!("ambiguous query; re-run with --pick N or an exact name");
                    }
                },
            };

            let profile = extract(row, &ColumnLayout::standard())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print!(
                    "{}",
                    render_report(&profile, table.period(), style, args.width, &labels)
                );
            }
        }

        Commands::Interactive => {
            let stdin = io::stdin();
            Session::new(&table, style, args.width).run(stdin.lock(), io::stdout())?;
        }
    }

    Ok(())
}
