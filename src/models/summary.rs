use crate::models::shift::{Money, ShiftRecord};
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::Serialize;

/// Marker shown instead of a date when a view has no records.
pub const NO_DATA_MARKER: &str = "no data for this view";

/// Numeric field that a series can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[value(name = "total_pay", alias = "total-pay")]
    TotalPay,
    #[value(name = "net_income", alias = "net-income")]
    NetIncome,
    #[value(name = "ot_pay", alias = "ot-pay")]
    OtPay,
    #[value(name = "ot_minutes", alias = "ot-minutes")]
    OtMinutes,
}

impl Metric {
    pub fn value_of(&self, record: &ShiftRecord) -> Decimal {
        match self {
            Metric::TotalPay => record.total_pay(),
            Metric::NetIncome => record.net_income(),
            Metric::OtPay => record.ot_pay(),
            Metric::OtMinutes => Decimal::from(record.ot_minutes()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::TotalPay => "total_pay",
            Metric::NetIncome => "net_income",
            Metric::OtPay => "ot_pay",
            Metric::OtMinutes => "ot_minutes",
        }
    }
}

/// Bucket width of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Month,
    Day,
}

impl Granularity {
    /// Length of the date prefix used as bucket key.
    pub fn key_len(&self) -> usize {
        match self {
            Granularity::Month => 7,
            Granularity::Day => 10,
        }
    }
}

/// One bucket of a series, value already rounded for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: Decimal,
}

/// A series as printed by `series --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesReport<'a> {
    pub metric: Metric,
    pub granularity: Granularity,
    pub points: &'a [SeriesPoint],
}

/// Headline figures of a filtered record set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub count: usize,
    pub total_pay: Money,
    pub net_income: Money,
    pub worker_payment: Money,
    pub ot_pay: Money,
    pub ot_minutes: i64,
    pub self_performed: usize,
    pub outsourced: usize,
    /// Lexicographic max of the dates; `None` when the view is empty.
    pub latest_date: Option<String>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// "Data current as of" label, or the no-data marker.
    pub fn as_of_label(&self) -> &str {
        self.latest_date.as_deref().unwrap_or(NO_DATA_MARKER)
    }
}

/// Everything a presentation layer needs for one filter state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewData {
    pub summary: Summary,
    pub series: Vec<SeriesPoint>,
    pub recent: Vec<ShiftRecord>,
    pub months: Vec<String>,
    pub event_types: Vec<String>,
}

/// Result of rendering the dashboard for the current state.
///
/// `Empty` is a valid load with nothing to show, not the same as `NotLoaded`.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    NotLoaded,
    Empty { months: Vec<String>, event_types: Vec<String> },
    Ready(ViewData),
}
