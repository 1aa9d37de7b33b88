use crate::export::ExportFormat;
use crate::models::summary::{Granularity, Metric};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for shiftledger
#[derive(Parser, Debug)]
#[command(
    name = "shiftledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log performed shifts, derive overtime pay and summarize payroll by view and month",
    long_about = None
)]
pub struct Cli {
    /// Override the shift data file (CSV)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Log progress to stderr (RUST_LOG takes precedence)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which records a view shows.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Scope to show (e.g. all, dem_nhac, open_mic)
    #[arg(long)]
    pub view: Option<String>,

    /// Month to show (YYYY-MM) or "all"
    #[arg(long)]
    pub month: Option<String>,

    /// Exact event type to show, or "all"
    #[arg(long = "event")]
    pub event_type: Option<String>,

    /// Seed the view from a saved query string, e.g. "view=open_mic&month=2024-01".
    /// --view and --month override the values it carries.
    #[arg(long)]
    pub query: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the default configuration and an empty data file
    Init,

    /// Show or edit the configuration file
    Config {
        /// Print the current configuration
        #[arg(long = "print")]
        print_config: bool,

        /// Edit the configuration file (default editor: $EDITOR, or nano/notepad)
        #[arg(long = "edit")]
        edit_config: bool,

        /// Editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor")]
        editor: Option<String>,
    },

    /// Append a performed shift to the data file
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Venue name
        venue: String,

        /// Shift type key from the configuration (e.g. dem_nhac, openmic)
        #[arg(long = "event")]
        shift_key: String,

        /// Actual end time (HH:MM)
        #[arg(long = "end")]
        end: String,

        /// The shift was covered by someone else
        #[arg(long)]
        outsourced: bool,

        /// Amount paid to the outsourced worker
        #[arg(long = "worker-pay", default_value_t = 0)]
        worker_pay: i64,
    },

    /// List the most recent shifts of a view
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Number of rows (default from config, 20)
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Show headline totals of a view
    Summary {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a metric bucketed by month or day
    Series {
        #[command(flatten)]
        filter: FilterArgs,

        /// Metric to sum
        #[arg(long, value_enum, default_value = "total_pay")]
        metric: Metric,

        /// Bucket width
        #[arg(long = "by", value_enum, default_value = "month")]
        granularity: Granularity,

        /// Print the series as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recompute ot_pay, total_pay and net_income in the data file
    Recompute {
        /// Report what would change without writing
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// Export the shifts of a view
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (defaults to the configured public file with --public)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Only write the columns that are safe to publish
        #[arg(long)]
        public: bool,

        /// Overwrite the output file if it exists
        #[arg(long, short = 'f')]
        force: bool,
    },
}
