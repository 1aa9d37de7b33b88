use crate::cli::commands::view::{open_session, print_view_header};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::shift::ShiftRecord;
use crate::models::summary::{DashboardView, Granularity, Metric, NO_DATA_MARKER};
use crate::ui::messages::warning;
use crate::utils::formatting::or_dash;
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, limit } = cmd {
        let limit = limit.unwrap_or(cfg.recent_limit);
        let session = open_session(cfg, filter, Metric::TotalPay, Granularity::Month, limit)?;

        print_view_header(&session);

        match session.view() {
            DashboardView::Ready(data) => {
                print!("{}", render_records(&data.recent));
                println!(
                    "Showing {} of {} shift(s).",
                    data.recent.len(),
                    data.summary.count
                );
            }
            DashboardView::Empty { .. } => warning(NO_DATA_MARKER),
            DashboardView::NotLoaded => warning("Shift data is not loaded."),
        }
    }
    Ok(())
}

fn render_records(records: &[ShiftRecord]) -> String {
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("Venue"),
        Column::left("Event"),
        Column::left("By"),
        Column::left("End"),
        Column::right("OT min"),
        Column::right("OT pay"),
        Column::right("Total"),
        Column::right("Worker"),
        Column::right("Net"),
    ]);

    for r in records {
        table.add_row(vec![
            r.date().to_string(),
            or_dash(r.venue()).to_string(),
            or_dash(r.event_type()).to_string(),
            or_dash(r.performed_by()).to_string(),
            or_dash(r.end_time()).to_string(),
            r.ot_minutes().to_string(),
            money(r.ot_pay()),
            money(r.total_pay()),
            money(r.worker_payment()),
            money(r.net_income()),
        ]);
    }

    table.render()
}
