// crates/dropdowns-cli/src/args.rs
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use dropdowns_core::{Direction, OrderBy};

/// CLI arguments for dropdowns
#[derive(Debug, Parser)]
#[command(
    name = "dropdowns",
    version,
    about = "Print and query the reference lists bundled with dropdowns-core"
)]
pub struct CliArgs {
    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Print JSON (`[{"value", "text"}]`) instead of aligned text.
    #[cfg(feature = "json")]
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the dataset names accepted by the other commands
    Datasets,

    /// Print a dataset through its builder
    List {
        /// Dataset name (e.g. countries, us-states, time-zones)
        dataset: String,

        /// Comma-separated allow-list of values (bypasses category defaults)
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,

        /// Comma-separated values to drop
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Sort order
        #[arg(long, value_enum)]
        order: Option<OrderArg>,
    },

    /// Find one entry by value (case-insensitive)
    Lookup {
        dataset: String,
        value: String,
    },

    /// Type-ahead search on labels (accent- and case-insensitive)
    Search {
        dataset: String,
        query: String,
    },

    /// Generate a number range
    Numbers {
        #[arg(allow_negative_numbers = true)]
        start: i32,
        #[arg(allow_negative_numbers = true)]
        end: i32,

        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        step: i32,

        #[arg(long)]
        descending: bool,
    },

    /// Generate a year list relative to the current year
    Years {
        #[command(subcommand)]
        span: YearSpan,
    },
}

#[derive(Debug, Subcommand)]
pub enum YearSpan {
    /// The last COUNT years, newest first
    Last {
        #[arg(allow_negative_numbers = true)]
        count: i32,
        #[arg(long)]
        ascending: bool,
    },
    /// The next COUNT years, oldest first
    Next {
        #[arg(allow_negative_numbers = true)]
        count: i32,
        #[arg(long)]
        descending: bool,
    },
    /// Every year between START and END
    Range {
        start: i32,
        end: i32,
        #[arg(long)]
        descending: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Text,
    TextDesc,
    Value,
    ValueDesc,
}

impl From<OrderArg> for OrderBy {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Text => OrderBy::Text,
            OrderArg::TextDesc => OrderBy::TextDescending,
            OrderArg::Value => OrderBy::Value,
            OrderArg::ValueDesc => OrderBy::ValueDescending,
        }
    }
}

/// Maps a `--descending` / `--ascending` switch onto a direction.
pub fn direction(descending: bool) -> Direction {
    if descending {
        Direction::Descending
    } else {
        Direction::Ascending
    }
}
