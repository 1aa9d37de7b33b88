use crate::cli::commands::view::{open_session, print_json, print_view_header};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::summary::{DashboardView, Granularity, Metric, NO_DATA_MARKER, Summary};
use crate::ui::messages::warning;
use crate::utils::{mins2readable, money};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { filter, json } = cmd {
        let session = open_session(
            cfg,
            filter,
            Metric::TotalPay,
            Granularity::Month,
            cfg.recent_limit,
        )?;

        if *json {
            return match session.view() {
                DashboardView::Ready(data) => print_json(&data.summary),
                _ => print_json(&Summary::default()),
            };
        }

        print_view_header(&session);

        match session.view() {
            DashboardView::Ready(data) => print_summary(&data.summary),
            DashboardView::Empty { months, .. } => {
                print_summary(&Summary::default());
                warning(NO_DATA_MARKER);
                if !months.is_empty() {
                    println!("Months with data in this view: {}", months.join(", "));
                }
            }
            DashboardView::NotLoaded => warning("Shift data is not loaded."),
        }
    }
    Ok(())
}

fn print_summary(s: &Summary) {
    println!("Shifts         : {}", s.count);
    println!(
        "Self / outsrc. : {} / {}",
        s.self_performed, s.outsourced
    );
    println!("Total pay      : {}", money(s.total_pay));
    println!("Net income     : {}", money(s.net_income));
    println!("Worker payment : {}", money(s.worker_payment));
    println!("OT pay         : {}", money(s.ot_pay));
    println!(
        "OT minutes     : {} ({})",
        s.ot_minutes,
        mins2readable(s.ot_minutes)
    );
    println!("Data as of     : {}", s.as_of_label());
}
