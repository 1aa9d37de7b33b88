use crate::cli::commands::view::{open_session, print_json, print_view_header};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::summary::{DashboardView, Metric, NO_DATA_MARKER, SeriesPoint, SeriesReport};
use crate::ui::messages::warning;
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Series {
        filter,
        metric,
        granularity,
        json,
    } = cmd
    {
        let session = open_session(cfg, filter, *metric, *granularity, cfg.recent_limit)?;

        if *json {
            let points: &[SeriesPoint] = match session.view() {
                DashboardView::Ready(data) => data.series.as_slice(),
                _ => &[],
            };
            return print_json(&SeriesReport {
                metric: *metric,
                granularity: *granularity,
                points,
            });
        }

        print_view_header(&session);

        match session.view() {
            DashboardView::Ready(data) => print!("{}", render_series(&data.series, *metric)),
            DashboardView::Empty { .. } => warning(NO_DATA_MARKER),
            DashboardView::NotLoaded => warning("Shift data is not loaded."),
        }
    }
    Ok(())
}

fn render_series(points: &[SeriesPoint], metric: Metric) -> String {
    let mut table = Table::new(vec![Column::left("Bucket"), Column::right(metric.as_str())]);
    for p in points {
        let value = match metric {
            Metric::OtMinutes => p.value.to_string(),
            _ => money(p.value),
        };
        table.add_row(vec![p.label.clone(), value]);
    }
    table.render()
}
