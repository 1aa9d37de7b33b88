use crate::core::payroll::{self, PayrollRule};
use rust_decimal::Decimal;

/// Monetary amount in whole currency units (VND), kept exact until display.
pub type Money = Decimal;

/// Descriptive fields of a shift, as read from the data file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftInfo {
    pub date: String,
    pub venue: String,
    pub event_type: String,
    pub performed_by: String,
    pub start_time: String,
    pub scheduled_end_time: String,
    pub actual_end_time: String,
}

/// One performed shift with its payroll figures.
///
/// Fields are private: a record is immutable once built and the derived
/// amounts (`ot_pay`, `total_pay`) can only come from the constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftRecord {
    date: String,
    venue: String,
    event_type: String,
    performed_by: String,
    start_time: String,
    scheduled_end_time: String,
    actual_end_time: String,
    base_pay: Money,
    ot_minutes: i64,
    ot_pay: Money,
    worker_payment: Money,
    total_pay: Money,
    net_income: Money,
}

impl ShiftRecord {
    /// Build a record, deriving `ot_pay` and `total_pay` from the rule.
    ///
    /// `net_income` is taken as given when `Some`, otherwise it is
    /// `total_pay - worker_payment`. Negative inputs are clamped to zero.
    pub fn new(
        info: ShiftInfo,
        base_pay: Money,
        ot_minutes: i64,
        worker_payment: Money,
        net_income: Option<Money>,
        rule: &PayrollRule,
    ) -> Self {
        let base_pay = base_pay.max(Decimal::ZERO);
        let ot_minutes = ot_minutes.max(0);
        let worker_payment = worker_payment.max(Decimal::ZERO);

        let ot_pay = rule.ot_pay(ot_minutes);
        let total_pay = payroll::total_pay(base_pay, ot_pay);
        let net_income =
            net_income.unwrap_or_else(|| payroll::net_income(total_pay, worker_payment));

        Self {
            date: info.date,
            venue: info.venue,
            event_type: info.event_type,
            performed_by: info.performed_by,
            start_time: info.start_time,
            scheduled_end_time: info.scheduled_end_time,
            actual_end_time: info.actual_end_time,
            base_pay,
            ot_minutes,
            ot_pay,
            worker_payment,
            total_pay,
            net_income,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// `YYYY-MM` prefix of the date.
    pub fn month(&self) -> &str {
        self.date.get(..7).unwrap_or(&self.date)
    }

    pub fn venue(&self) -> &str {
        &self.venue
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn performed_by(&self) -> &str {
        &self.performed_by
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn scheduled_end_time(&self) -> &str {
        &self.scheduled_end_time
    }

    pub fn actual_end_time(&self) -> &str {
        &self.actual_end_time
    }

    /// Actual end time when recorded, scheduled end otherwise.
    pub fn end_time(&self) -> &str {
        if self.actual_end_time.trim().is_empty() {
            &self.scheduled_end_time
        } else {
            &self.actual_end_time
        }
    }

    pub fn base_pay(&self) -> Money {
        self.base_pay
    }

    pub fn ot_minutes(&self) -> i64 {
        self.ot_minutes
    }

    pub fn ot_pay(&self) -> Money {
        self.ot_pay
    }

    pub fn worker_payment(&self) -> Money {
        self.worker_payment
    }

    pub fn total_pay(&self) -> Money {
        self.total_pay
    }

    pub fn net_income(&self) -> Money {
        self.net_income
    }

    /// Cell text for a data-file column; unknown columns are empty.
    pub fn column(&self, name: &str) -> String {
        match name {
            "date" => self.date.clone(),
            "venue" => self.venue.clone(),
            "event_type" => self.event_type.clone(),
            "performed_by" => self.performed_by.clone(),
            "start_time" => self.start_time.clone(),
            "scheduled_end_time" => self.scheduled_end_time.clone(),
            "actual_end_time" => self.actual_end_time.clone(),
            "base_pay" => money_cell(self.base_pay),
            "ot_minutes" => self.ot_minutes.to_string(),
            "ot_pay" => money_cell(self.ot_pay),
            "total_pay" => money_cell(self.total_pay),
            "worker_payment" => money_cell(self.worker_payment),
            "net_income" => money_cell(self.net_income),
            _ => String::new(),
        }
    }
}

/// Plain CSV rendering of an amount (`600000`, `12.5`).
pub fn money_cell(value: Money) -> String {
    value.normalize().to_string()
}

/// Column order of the full data file.
pub const CSV_HEADER: [&str; 13] = [
    "date",
    "venue",
    "event_type",
    "performed_by",
    "start_time",
    "scheduled_end_time",
    "actual_end_time",
    "base_pay",
    "ot_minutes",
    "ot_pay",
    "total_pay",
    "worker_payment",
    "net_income",
];

/// Columns that are safe to publish.
pub const PUBLIC_COLUMNS: [&str; 6] = [
    "date",
    "event_type",
    "actual_end_time",
    "ot_minutes",
    "ot_pay",
    "total_pay",
];
