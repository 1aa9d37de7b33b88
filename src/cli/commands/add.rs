use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::ShiftEntry;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{success, warning};
use crate::utils::money;

/// Handle the `add` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        venue,
        shift_key,
        end,
        outsourced,
        worker_pay,
    } = cmd
    {
        if !*outsourced && *worker_pay != 0 {
            warning("--worker-pay is ignored for a self-performed shift.");
        }

        let entry = ShiftEntry {
            date: date.clone(),
            venue: venue.clone(),
            shift_key: shift_key.clone(),
            outsourced: *outsourced,
            actual_end: end.clone(),
            worker_payment: *worker_pay,
        };
        let record = entry.compute(cfg)?;

        let path = cfg.data_path();
        store::append_record(&path, &record)?;

        success(format!("Saved to {}", path.display()));
        println!(
            "🗓️  {} – {} at {}",
            record.date(),
            record.event_type(),
            record.venue()
        );
        println!("👤 Performed by: {}", record.performed_by());
        println!(
            "💰 Base pay: {} | ⏱️ OT: {} min = {} | 💵 Total: {} | 📉 Net: {}",
            money(record.base_pay()),
            record.ot_minutes(),
            money(record.ot_pay()),
            money(record.total_pay()),
            money(record.net_income())
        );
    }
    Ok(())
}
