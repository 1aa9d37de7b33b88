//! Overtime billing rules.
//!
//! Overtime is billed in fixed blocks; every started block costs the full
//! block rate.

use crate::models::shift::Money;
use chrono::{Duration, NaiveDate, NaiveTime};
use rust_decimal::Decimal;

pub const DEFAULT_BLOCK_MINUTES: i64 = 15;
pub const DEFAULT_BLOCK_RATE: i64 = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayrollRule {
    pub block_minutes: i64,
    pub block_rate: Money,
}

impl Default for PayrollRule {
    fn default() -> Self {
        Self {
            block_minutes: DEFAULT_BLOCK_MINUTES,
            block_rate: Decimal::from(DEFAULT_BLOCK_RATE),
        }
    }
}

impl PayrollRule {
    pub fn new(block_minutes: i64, block_rate: Money) -> Self {
        Self {
            block_minutes: block_minutes.max(1),
            block_rate,
        }
    }

    /// Number of billable blocks for `minutes` (ceil division).
    pub fn blocks(&self, minutes: i64) -> i64 {
        if minutes <= 0 {
            return 0;
        }
        minutes / self.block_minutes + i64::from(minutes % self.block_minutes != 0)
    }

    /// `ceil(minutes / block_minutes) * block_rate`, saturating at
    /// `Decimal::MAX`.
    pub fn ot_pay(&self, minutes: i64) -> Money {
        Decimal::from(self.blocks(minutes))
            .checked_mul(self.block_rate)
            .unwrap_or(Decimal::MAX)
    }

    /// Overtime minutes between the scheduled and the actual end of a shift,
    /// rounded up to whole blocks.
    ///
    /// An actual end earlier than the shift start is taken as past midnight.
    pub fn ot_minutes_between(
        &self,
        date: NaiveDate,
        start: NaiveTime,
        scheduled_end: NaiveTime,
        actual_end: NaiveTime,
    ) -> i64 {
        let start_dt = date.and_time(start);
        let mut scheduled_dt = date.and_time(scheduled_end);
        let mut actual_dt = date.and_time(actual_end);

        if scheduled_dt < start_dt {
            scheduled_dt += Duration::days(1);
        }
        if actual_dt < start_dt {
            actual_dt += Duration::days(1);
        }
        if actual_dt <= scheduled_dt {
            return 0;
        }

        let diff = (actual_dt - scheduled_dt).num_seconds();
        let block_secs = self.block_minutes * 60;
        let blocks = diff / block_secs + i64::from(diff % block_secs != 0);
        blocks * self.block_minutes
    }
}

/// Saturating sum of two amounts.
pub fn add_money(a: Money, b: Money) -> Money {
    a.checked_add(b)
        .unwrap_or(if b.is_sign_negative() { Decimal::MIN } else { Decimal::MAX })
}

pub fn total_pay(base_pay: Money, ot_pay: Money) -> Money {
    add_money(base_pay, ot_pay)
}

pub fn net_income(total_pay: Money, worker_payment: Money) -> Money {
    add_money(total_pay, -worker_payment)
}
