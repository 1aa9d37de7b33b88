//! Decode raw CSV rows into `ShiftRecord`s.
//!
//! Every numeric column goes through an explicit parse-or-default function:
//! a missing, empty, malformed or negative value becomes zero. Rows without
//! a date are dropped silently, trailing blank lines being common in files
//! edited by hand.

use crate::core::payroll::{self, PayrollRule};
use crate::errors::{AppError, AppResult};
use crate::models::shift::{Money, ShiftInfo, ShiftRecord};
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

/// One CSV row: column name → cell text.
pub type RawRow = HashMap<String, String>;

/// Trimmed cell value, `None` when the column is absent or blank.
pub fn field<'a>(row: &'a RawRow, column: &str) -> Option<&'a str> {
    row.get(column)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn text(row: &RawRow, column: &str) -> String {
    field(row, column).unwrap_or_default().to_string()
}

/// Largest amount accepted in a money cell; anything above is malformed.
pub const MAX_MONEY: i64 = 1_000_000_000_000_000;

/// Largest overtime accepted in a minutes cell (about 19 years).
pub const MAX_MINUTES: i64 = 10_000_000;

fn grouped_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^-?\d{1,3}(,\d{3})+(\.\d+)?$").expect("valid grouping regex")
    })
}

/// Signed amount, `None` if absent, unparseable or out of range.
///
/// A comma is only accepted as a thousands separator in groups of three
/// (`1,250,000`); `1,5` is malformed.
pub fn parse_signed_money(value: Option<&str>) -> Option<Money> {
    let v = value?.trim();
    let v = if v.contains(',') {
        if !grouped_regex().is_match(v) {
            return None;
        }
        v.replace(',', "")
    } else {
        v.to_string()
    };
    Decimal::from_str(&v)
        .or_else(|_| Decimal::from_scientific(&v))
        .ok()
        .filter(|d| d.abs() <= Decimal::from(MAX_MONEY))
}

/// Parse a money cell, `None` if absent, unparseable, negative or out of
/// range.
pub fn parse_money(value: Option<&str>) -> Option<Money> {
    parse_signed_money(value).filter(|d| !d.is_sign_negative())
}

pub fn parse_money_or_zero(value: Option<&str>) -> Money {
    parse_money(value).unwrap_or(Decimal::ZERO)
}

/// Integer minutes; a decimal literal is truncated. Negative or
/// out-of-range values are malformed.
pub fn parse_minutes(value: Option<&str>) -> Option<i64> {
    let v = value?.trim();
    v.parse::<i64>()
        .ok()
        .or_else(|| {
            v.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite() && f.abs() <= MAX_MINUTES as f64)
                .map(|f| f.trunc() as i64)
        })
        .filter(|m| (0..=MAX_MINUTES).contains(m))
}

pub fn parse_minutes_or_zero(value: Option<&str>) -> i64 {
    parse_minutes(value).unwrap_or(0)
}

/// Decode one row; `None` when it has no date.
pub fn ingest_row(row: &RawRow, rule: &PayrollRule) -> Option<ShiftRecord> {
    let date = field(row, "date")?.to_string();

    let ot_minutes = parse_minutes_or_zero(field(row, "ot_minutes"));
    let ot_pay = rule.ot_pay(ot_minutes);

    // Public exports carry no base_pay: recover it from the supplied total.
    let base_pay = match parse_money(field(row, "base_pay")) {
        Some(base) => base,
        None => parse_money(field(row, "total_pay"))
            .map(|total| (total - ot_pay).max(Decimal::ZERO))
            .unwrap_or(Decimal::ZERO),
    };
    let worker_payment = parse_money_or_zero(field(row, "worker_payment"));
    let net_income = parse_signed_money(field(row, "net_income"));

    let info = ShiftInfo {
        date,
        venue: text(row, "venue"),
        event_type: text(row, "event_type"),
        performed_by: text(row, "performed_by"),
        start_time: text(row, "start_time"),
        scheduled_end_time: text(row, "scheduled_end_time"),
        actual_end_time: text(row, "actual_end_time"),
    };

    let record = ShiftRecord::new(info, base_pay, ot_minutes, worker_payment, net_income, rule);

    if payroll::add_money(record.net_income(), record.worker_payment()) != record.total_pay() {
        log::warn!(
            "{}: net_income {} does not match total_pay {} - worker_payment {}",
            record.date(),
            record.net_income(),
            record.total_pay(),
            record.worker_payment()
        );
    }

    Some(record)
}

/// Decode rows in order, dropping the ones without a date.
pub fn ingest(rows: &[RawRow], rule: &PayrollRule) -> Vec<ShiftRecord> {
    let records: Vec<ShiftRecord> = rows.iter().filter_map(|r| ingest_row(r, rule)).collect();
    let dropped = rows.len() - records.len();
    if dropped > 0 {
        log::debug!("skipped {dropped} row(s) without a date");
    }
    records
}

/// Read CSV text with a header row into its header and raw rows.
///
/// Short rows are padded, fully blank rows skipped. Header names are trimmed.
pub fn read_table<R: Read>(reader: R) -> AppResult<(Vec<String>, Vec<RawRow>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let mut rows = Vec::new();

    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let row: RawRow = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), record.get(i).unwrap_or_default().to_string()))
            .collect();
        rows.push(row);
    }

    Ok((headers, rows))
}

pub fn read_rows<R: Read>(reader: R) -> AppResult<Vec<RawRow>> {
    read_table(reader).map(|(_, rows)| rows)
}

/// Load and ingest a data file. Any failure aborts the whole load.
pub fn load_file(path: &Path, rule: &PayrollRule) -> AppResult<Vec<ShiftRecord>> {
    let file = File::open(path).map_err(|e| AppError::load(path, e))?;
    let rows = read_rows(file).map_err(|e| AppError::load(path, e))?;
    let records = ingest(&rows, rule);
    log::info!("loaded {} shift(s) from {}", records.len(), path.display());
    Ok(records)
}

