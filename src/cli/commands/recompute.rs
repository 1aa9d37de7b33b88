use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recompute::recompute_file;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `recompute` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recompute { dry_run } = cmd {
        let path = cfg.data_path();
        let report = recompute_file(&path, &cfg.payroll_rule(), *dry_run)?;

        if *dry_run {
            info(format!(
                "{} of {} row(s) would change in {} ({} row(s) without date would be dropped)",
                report.changed,
                report.rows,
                path.display(),
                report.dropped
            ));
        } else {
            success(format!(
                "Updated {} row(s) in {}",
                report.changed,
                path.display()
            ));
        }
    }
    Ok(())
}
