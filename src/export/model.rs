// src/export/model.rs

use crate::models::shift::ShiftRecord;
use serde::Serialize;

/// Flat, display-ready shape of a record for JSON export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ShiftExport {
    pub date: String,
    pub venue: String,
    pub event_type: String,
    pub performed_by: String,
    pub end_time: String,
    pub base_pay: String,
    pub ot_minutes: i64,
    pub ot_pay: String,
    pub total_pay: String,
    pub worker_payment: String,
    pub net_income: String,
}

impl From<&ShiftRecord> for ShiftExport {
    fn from(r: &ShiftRecord) -> Self {
        Self {
            date: r.date().to_string(),
            venue: r.venue().to_string(),
            event_type: r.event_type().to_string(),
            performed_by: r.performed_by().to_string(),
            end_time: r.end_time().to_string(),
            base_pay: r.column("base_pay"),
            ot_minutes: r.ot_minutes(),
            ot_pay: r.column("ot_pay"),
            total_pay: r.column("total_pay"),
            worker_payment: r.column("worker_payment"),
            net_income: r.column("net_income"),
        }
    }
}

/// Records as string rows in the given column order.
pub fn export_rows(records: &[&ShiftRecord], columns: &[&str]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|r| columns.iter().map(|c| r.column(c)).collect())
        .collect()
}
