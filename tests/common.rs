#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use shiftledger::core::ingest::{self, RawRow};
use shiftledger::core::payroll::PayrollRule;
use shiftledger::models::shift::ShiftRecord;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const FULL_HEADER: &str = "date,venue,event_type,performed_by,start_time,scheduled_end_time,actual_end_time,base_pay,ot_minutes,ot_pay,total_pay,worker_payment,net_income";

/// Three shifts over two months, one of them an open mic, plus a blank
/// trailing row.
pub const SAMPLE_CSV: &str = "\
date,venue,event_type,performed_by,start_time,scheduled_end_time,actual_end_time,base_pay,ot_minutes,ot_pay,total_pay,worker_payment,net_income
2024-01-05,Hanoi Rock City,Đêm nhạc,Tự làm,19:30,23:00,23:10,600000,15,50000,650000,0,650000
2024-01-20,Hanoi Rock City,Openmic,Thuê ngoài,20:00,22:30,22:30,500000,0,0,500000,300000,200000
2024-02-02,Binh Quoi,Đêm nhạc,Tự làm,19:30,23:00,23:40,600000,45,150000,750000,0,750000
,,,,,,,,,,,,
";

/// An isolated config home plus data file for CLI tests.
pub struct Sandbox {
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn with_data(content: &str) -> Self {
        let sb = Self::new();
        fs::write(sb.data_path(), content).expect("write data file");
        sb
    }

    pub fn data_path(&self) -> PathBuf {
        self.home.path().join("shifts.csv")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    pub fn data_arg(&self) -> String {
        self.data_path().to_string_lossy().to_string()
    }

    /// The binary, pointed at this sandbox's config home and data file.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("shiftledger");
        cmd.env("SHIFTLEDGER_HOME", self.home.path())
            .env_remove("RUST_LOG")
            .args(["--data", &self.data_arg()]);
        cmd
    }

    pub fn read_data(&self) -> String {
        fs::read_to_string(self.data_path()).expect("read data file")
    }
}

pub fn row(pairs: &[(&str, &str)]) -> RawRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Ingest a single row with the default rule.
pub fn record(pairs: &[(&str, &str)]) -> ShiftRecord {
    ingest::ingest_row(&row(pairs), &PayrollRule::default()).expect("row has a date")
}

/// Shorthand for the common fields of a test record.
pub fn shift(date: &str, event_type: &str, performed_by: &str, base: &str, ot: &str, worker: &str) -> ShiftRecord {
    record(&[
        ("date", date),
        ("event_type", event_type),
        ("performed_by", performed_by),
        ("base_pay", base),
        ("ot_minutes", ot),
        ("worker_payment", worker),
    ])
}

pub fn sample_records() -> Vec<ShiftRecord> {
    let rows = ingest::read_rows(SAMPLE_CSV.as_bytes()).expect("parse sample");
    ingest::ingest(&rows, &PayrollRule::default())
}

pub fn refs(records: &[ShiftRecord]) -> Vec<&ShiftRecord> {
    records.iter().collect()
}

