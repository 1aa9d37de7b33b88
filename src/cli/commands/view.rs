//! Shared plumbing of the view commands (list, summary, series, export).

use crate::cli::parser::FilterArgs;
use crate::config::Config;
use crate::core::ingest;
use crate::core::logic::ViewOptions;
use crate::core::session::DashboardSession;
use crate::errors::{AppError, AppResult};
use crate::models::filter::{FilterState, Selection, parse_month};
use crate::models::shift::ShiftRecord;
use crate::models::summary::{Granularity, Metric};
use crate::ui::messages::header;
use serde::Serialize;

/// Build the filter state: query string first, explicit flags on top.
pub(crate) fn resolve_state(args: &FilterArgs) -> AppResult<FilterState> {
    let mut state = match &args.query {
        Some(q) => FilterState::from_query(q)?,
        None => FilterState::default(),
    };
    if let Some(view) = &args.view {
        state = state.with_scope(view);
    }
    if let Some(month) = &args.month {
        state = state.with_month(parse_month(month)?);
    }
    if let Some(event) = &args.event_type {
        state = state.with_event_type(Selection::parse(event));
    }
    Ok(state)
}

pub(crate) fn load_records(cfg: &Config) -> AppResult<Vec<ShiftRecord>> {
    ingest::load_file(&cfg.data_path(), &cfg.payroll_rule())
}

/// Load the data file into a session seeded with the requested state.
pub(crate) fn open_session(
    cfg: &Config,
    args: &FilterArgs,
    metric: Metric,
    granularity: Granularity,
    recent_limit: usize,
) -> AppResult<DashboardSession> {
    let state = resolve_state(args)?;
    let scopes = cfg.scope_set();
    // fail on an unknown view before touching the data file
    scopes.get(&state.scope)?;

    let options = ViewOptions {
        metric,
        granularity,
        recent_limit,
        self_marker: cfg.self_marker.clone(),
    };

    let mut session = DashboardSession::new(scopes, options, state);
    let records = load_records(cfg)?;
    session.load(records)?;
    Ok(session)
}

pub(crate) fn print_view_header(session: &DashboardSession) {
    let state = session.state();
    header(format!(
        "view={} · month={} · event={}",
        state.scope, state.month, state.event_type
    ));
    let query = session.query();
    if !query.is_empty() {
        println!("query: ?{query}");
    }
}

/// Pretty JSON on stdout, for the `--json` views.
pub(crate) fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
    println!("{text}");
    Ok(())
}
