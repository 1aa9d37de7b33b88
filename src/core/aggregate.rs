//! Series and summary reductions over a filtered record set.

use crate::core::filter;
use crate::core::normalize;
use crate::core::payroll::add_money;
use crate::models::shift::ShiftRecord;
use crate::models::summary::{Granularity, Metric, SeriesPoint, Summary};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

/// Round a sum to a whole unit for display (half away from zero).
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Month that a day-level series is drawn for: the pinned one, or the most
/// recent month present.
pub fn day_bucket_month(records: &[&ShiftRecord], pinned_month: Option<&str>) -> Option<String> {
    match pinned_month {
        Some(m) => Some(m.to_string()),
        None => filter::available_months(records).into_iter().next(),
    }
}

/// Exact per-bucket sums, keyed and sorted by date prefix.
pub fn bucket_totals(
    records: &[&ShiftRecord],
    metric: Metric,
    granularity: Granularity,
    pinned_month: Option<&str>,
) -> BTreeMap<String, Decimal> {
    let day_month = match granularity {
        Granularity::Day => day_bucket_month(records, pinned_month),
        Granularity::Month => None,
    };

    let mut buckets: BTreeMap<String, Decimal> = BTreeMap::new();
    for record in records {
        if let Some(month) = &day_month
            && record.month() != month
        {
            continue;
        }
        let key = record
            .date()
            .get(..granularity.key_len())
            .unwrap_or(record.date())
            .to_string();
        let sum = buckets.entry(key).or_insert(Decimal::ZERO);
        *sum = add_money(*sum, metric.value_of(record));
    }
    buckets
}

/// Label/value pairs in ascending key order; only the output is rounded.
pub fn bucket_series(
    records: &[&ShiftRecord],
    metric: Metric,
    granularity: Granularity,
    pinned_month: Option<&str>,
) -> Vec<SeriesPoint> {
    bucket_totals(records, metric, granularity, pinned_month)
        .into_iter()
        .map(|(label, value)| SeriesPoint {
            label,
            value: round_whole(value),
        })
        .collect()
}

pub fn is_self_performed(record: &ShiftRecord, self_marker: &str) -> bool {
    normalize::contains(record.performed_by(), self_marker)
}

/// Headline figures. An empty set gives zeroes and no latest date; sums
/// saturate instead of overflowing.
pub fn summarize(records: &[&ShiftRecord], self_marker: &str) -> Summary {
    let mut summary = Summary::default();

    for record in records {
        summary.count += 1;
        summary.total_pay = add_money(summary.total_pay, record.total_pay());
        summary.net_income = add_money(summary.net_income, record.net_income());
        summary.worker_payment = add_money(summary.worker_payment, record.worker_payment());
        summary.ot_pay = add_money(summary.ot_pay, record.ot_pay());
        summary.ot_minutes = summary.ot_minutes.saturating_add(record.ot_minutes());
        if is_self_performed(record, self_marker) {
            summary.self_performed += 1;
        }
        if summary
            .latest_date
            .as_deref()
            .is_none_or(|latest| record.date() > latest)
        {
            summary.latest_date = Some(record.date().to_string());
        }
    }

    summary.outsourced = summary.count - summary.self_performed;
    summary
}

/// Most recent `limit` records, newest first. Ties keep input order.
pub fn recent<'a>(records: &[&'a ShiftRecord], limit: usize) -> Vec<&'a ShiftRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date().cmp(a.date()));
    sorted.truncate(limit);
    sorted
}
