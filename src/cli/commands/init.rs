use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes the configuration file (skipped in test mode, or when one already
/// exists) and creates the data file with its header if it is missing.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let conf_path = Config::config_file();

    println!("⚙️  Initializing shiftledger…");

    if cli.test {
        info("Test mode: configuration file left untouched.");
    } else if conf_path.exists() {
        info(format!("Config file : {} (kept)", conf_path.display()));
    } else {
        cfg.save_to(&conf_path)?;
        success(format!("Config file : {}", conf_path.display()));
    }

    let data_path = cfg.data_path();
    if store::ensure_data_file(&data_path)? {
        success(format!("Data file   : {} (created)", data_path.display()));
    } else {
        info(format!("Data file   : {} (kept)", data_path.display()));
    }

    println!("🎉 shiftledger initialization completed!");
    Ok(())
}
