use clap::{Parser, Subcommand};
use popview_cli::chart::ChartStyle;
use popview_core::DatasetVariant;

/// CLI arguments for popview
#[derive(Debug, Parser)]
#[command(
    name = "popview",
    version,
    about = "Browse a monthly population-by-age-and-sex extract by administrative district"
)]
pub struct CliArgs {
    /// Path to the CP949 CSV extract (default: data/202205.csv); `.csv.gz` is accepted
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Dataset language variant: ko or en
    #[arg(long = "variant", global = true, default_value = "ko", value_parser = parse_variant)]
    pub variant: DatasetVariant,

    /// Chart style (default: pyramid for ko, bars for en)
    #[arg(long = "chart", global = true, value_enum)]
    pub chart: Option<ChartStyle>,

    /// Width of the longest bar, in characters
    #[arg(long = "width", global = true, default_value_t = 50)]
    pub width: usize,

    /// Without a subcommand the interactive prompt starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded table
    Stats,

    /// List canonical district names
    Districts {
        /// Only names containing this substring
        filter: Option<String>,
    },

    /// Show totals and the age chart for one district
    Show {
        /// Substring of the district name (case-sensitive)
        query: String,

        /// 1-based candidate to use when the query is ambiguous
        #[arg(long = "pick")]
        pick: Option<usize>,

        /// Print the age/sex profile as JSON instead of a chart
        #[arg(long = "json")]
        json: bool,
    },

    /// Prompt for district names until an empty line
    Interactive,
}

fn parse_variant(s: &str) -> Result<DatasetVariant, String> {
    s.parse::<DatasetVariant>().map_err(|e| e.to_string())
}
