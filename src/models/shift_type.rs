use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Timetable and base pay of a kind of shift (e.g. a concert night).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftType {
    pub label: String,
    /// HH:MM
    pub start_time: String,
    /// HH:MM
    pub scheduled_end: String,
    pub base_pay: i64,
}

impl ShiftType {
    pub fn new(label: &str, start_time: &str, scheduled_end: &str, base_pay: i64) -> Self {
        Self {
            label: label.to_string(),
            start_time: start_time.to_string(),
            scheduled_end: scheduled_end.to_string(),
            base_pay,
        }
    }

    pub fn start(&self) -> AppResult<NaiveTime> {
        parse_hhmm(&self.start_time)
    }

    pub fn end(&self) -> AppResult<NaiveTime> {
        parse_hhmm(&self.scheduled_end)
    }
}

/// Parse an `HH:MM` time of day.
pub fn parse_hhmm(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| AppError::InvalidTime(s.to_string()))
}
