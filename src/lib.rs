//! shiftledger library root.
//! Exposes the CLI parser, the high-level run() function and the payroll
//! core (ingestion, filtering, aggregation).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Series { .. } => cli::commands::series::handle(&cli.command, cfg),
        Commands::Recompute { .. } => cli::commands::recompute::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "shiftledger=info" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // configuration is loaded once and passed down
    let mut cfg = Config::load()?;

    if let Some(custom_data) = &cli.data {
        cfg.data_file = custom_data.clone();
    }

    dispatch(&cli, &cfg)
}
