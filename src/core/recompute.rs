//! Bring stored `ot_pay`, `total_pay` and `net_income` cells back in line
//! with the billing rule.

use crate::core::ingest::{self, RawRow, field};
use crate::core::payroll::{self, PayrollRule};
use crate::errors::{AppError, AppResult};
use crate::models::shift::money_cell;
use crate::store;
use std::fs::File;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 6] = [
    "base_pay",
    "ot_minutes",
    "ot_pay",
    "total_pay",
    "worker_payment",
    "net_income",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecomputeReport {
    pub rows: usize,
    pub changed: usize,
    pub dropped: usize,
}

/// Recompute the derived cells of one row in place; returns whether
/// anything changed.
///
/// Net income is always re-derived here, unlike at ingestion where a
/// supplied value is kept.
pub fn recompute_row(row: &mut RawRow, rule: &PayrollRule) -> bool {
    let base_pay = ingest::parse_money_or_zero(field(row, "base_pay"));
    let ot_minutes = ingest::parse_minutes_or_zero(field(row, "ot_minutes"));
    let worker_payment = ingest::parse_money_or_zero(field(row, "worker_payment"));

    let ot_pay = rule.ot_pay(ot_minutes);
    let total_pay = payroll::total_pay(base_pay, ot_pay);
    let net_income = payroll::net_income(total_pay, worker_payment);

    let stale = ingest::parse_money_or_zero(field(row, "ot_pay")) != ot_pay
        || ingest::parse_money_or_zero(field(row, "total_pay")) != total_pay
        || ingest::parse_signed_money(field(row, "net_income")) != Some(net_income);

    if stale {
        row.insert("ot_pay".into(), money_cell(ot_pay));
        row.insert("total_pay".into(), money_cell(total_pay));
        row.insert("net_income".into(), money_cell(net_income));
    }
    stale
}

/// Recompute a data file. Rows without a date are dropped from the
/// rewritten file; with `dry_run` nothing is written.
pub fn recompute_file(path: &Path, rule: &PayrollRule, dry_run: bool) -> AppResult<RecomputeReport> {
    let file = File::open(path).map_err(|e| AppError::load(path, e))?;
    let (header, rows) = ingest::read_table(file).map_err(|e| AppError::load(path, e))?;

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !header.iter().any(|h| h == c))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Other(format!(
            "missing required column(s) in {}: {}",
            path.display(),
            missing.join(", ")
        )));
    }

    let mut report = RecomputeReport::default();
    let mut out = Vec::with_capacity(rows.len());

    for mut row in rows {
        if field(&row, "date").is_none() {
            report.dropped += 1;
            continue;
        }
        if recompute_row(&mut row, rule) {
            report.changed += 1;
        }
        report.rows += 1;
        out.push(
            header
                .iter()
                .map(|h| row.get(h).cloned().unwrap_or_default())
                .collect::<Vec<String>>(),
        );
    }

    if !dry_run {
        store::write_table(path, &header, &out)?;
        log::info!(
            "recomputed {}: {} changed, {} dropped",
            path.display(),
            report.changed,
            report.dropped
        );
    }

    Ok(report)
}
