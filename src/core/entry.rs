//! Building a data-file row for a newly performed shift.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::shift::{ShiftInfo, ShiftRecord};
use crate::models::shift_type::parse_hhmm;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// What an operator reports after a shift.
#[derive(Debug, Clone)]
pub struct ShiftEntry {
    pub date: String,
    pub venue: String,
    /// Key into the configured shift types (e.g. `dem_nhac`).
    pub shift_key: String,
    pub outsourced: bool,
    /// HH:MM
    pub actual_end: String,
    pub worker_payment: i64,
}

impl ShiftEntry {
    /// Derive base pay, overtime and net income from the shift type.
    ///
    /// The worker payment only applies to outsourced shifts.
    pub fn compute(&self, cfg: &Config) -> AppResult<ShiftRecord> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(self.date.clone()))?;

        let venue = self.venue.trim();
        if venue.is_empty() {
            return Err(AppError::Other("venue cannot be empty".into()));
        }

        let shift = cfg
            .shift_types
            .get(&self.shift_key)
            .ok_or_else(|| AppError::UnknownShiftType(self.shift_key.clone()))?;

        let start = shift.start()?;
        let scheduled_end = shift.end()?;
        let actual_end = parse_hhmm(&self.actual_end)?;

        if self.worker_payment < 0 {
            return Err(AppError::Other("worker payment cannot be negative".into()));
        }

        let rule = cfg.payroll_rule();
        let ot_minutes = rule.ot_minutes_between(date, start, scheduled_end, actual_end);
        let worker_payment = if self.outsourced {
            Decimal::from(self.worker_payment)
        } else {
            Decimal::ZERO
        };

        let info = ShiftInfo {
            date: date.format("%Y-%m-%d").to_string(),
            venue: venue.to_string(),
            event_type: shift.label.clone(),
            performed_by: if self.outsourced {
                cfg.outsourced_label.clone()
            } else {
                cfg.self_marker.clone()
            },
            start_time: start.format("%H:%M").to_string(),
            scheduled_end_time: scheduled_end.format("%H:%M").to_string(),
            actual_end_time: actual_end.format("%H:%M").to_string(),
        };

        Ok(ShiftRecord::new(
            info,
            Decimal::from(shift.base_pay),
            ot_minutes,
            worker_payment,
            None,
            &rule,
        ))
    }
}
