use predicates::str::contains;
use pretty_assertions::assert_eq;
use std::fs;

mod common;
use common::{SAMPLE_CSV, Sandbox};

#[test]
fn test_export_public_csv_to_default_file() {
    let sb = Sandbox::with_data(SAMPLE_CSV);

    sb.cmd()
        .args(["export", "--public"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"))
        .stdout(contains("3 row(s)"));

    let out = fs::read_to_string(sb.path("shifts_public.csv")).unwrap();
    let expected = "\
date,event_type,actual_end_time,ot_minutes,ot_pay,total_pay
2024-01-05,Đêm nhạc,23:10,15,50000,650000
2024-01-20,Openmic,22:30,0,0,500000
2024-02-02,Đêm nhạc,23:40,45,150000,750000
";
    assert_eq!(out, expected);
    assert!(!out.contains("Hanoi Rock City"));
    assert!(!out.contains("300000"));
}

#[test]
fn test_export_public_of_one_view() {
    let sb = Sandbox::with_data(SAMPLE_CSV);
    let target = sb.path("open_mic.csv");

    sb.cmd()
        .args([
            "export",
            "--public",
            "--view",
            "open_mic",
            "--file",
            &target.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(contains("1 row(s)"));

    let out = fs::read_to_string(&target).unwrap();
    assert_eq!(out.lines().count(), 2);
    assert!(out.contains("2024-01-20,Openmic"));
}

#[test]
fn test_export_full_csv_keeps_all_columns() {
    let sb = Sandbox::with_data(SAMPLE_CSV);
    let target = sb.path("full.csv");

    sb.cmd()
        .args([
            "export",
            "--month",
            "2024-01",
            "--file",
            &target.to_string_lossy(),
        ])
        .assert()
        .success();

    let out = fs::read_to_string(&target).unwrap();
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some(common::FULL_HEADER));
    assert_eq!(
        lines.next(),
        Some("2024-01-05,Hanoi Rock City,Đêm nhạc,Tự làm,19:30,23:00,23:10,600000,15,50000,650000,0,650000")
    );
    assert_eq!(lines.count(), 1);
}

#[test]
fn test_export_json() {
    let sb = Sandbox::with_data(SAMPLE_CSV);
    let target = sb.path("shifts.json");

    sb.cmd()
        .args([
            "export",
            "--format",
            "json",
            "--view",
            "dem_nhac",
            "--file",
            &target.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    let items = json.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["date"], "2024-01-05");
    assert_eq!(items[1]["total_pay"], "750000");
    assert_eq!(items[1]["ot_minutes"], 45);
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let sb = Sandbox::with_data(SAMPLE_CSV);
    let target = sb.path("out.csv");
    fs::write(&target, "keep me").unwrap();

    sb.cmd()
        .args(["export", "--file", &target.to_string_lossy()])
        .assert()
        .failure()
        .stderr(contains("already exists"));
    assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");

    sb.cmd()
        .args(["export", "--force", "--file", &target.to_string_lossy()])
        .assert()
        .success();
    assert!(fs::read_to_string(&target).unwrap().starts_with("date,"));
}

#[test]
fn test_export_refuses_data_file_as_target() {
    let sb = Sandbox::with_data(SAMPLE_CSV);

    sb.cmd()
        .args(["export", "--force", "--file", &sb.data_arg()])
        .assert()
        .failure()
        .stderr(contains("refusing to overwrite"));
    assert_eq!(sb.read_data(), SAMPLE_CSV);
}

#[test]
fn test_export_public_json_is_rejected() {
    let sb = Sandbox::with_data(SAMPLE_CSV);

    sb.cmd()
        .args(["export", "--public", "--format", "json"])
        .assert()
        .failure()
        .stderr(contains("only available as csv"));
}

#[test]
fn test_export_requires_a_target() {
    let sb = Sandbox::with_data(SAMPLE_CSV);

    sb.cmd()
        .arg("export")
        .assert()
        .failure()
        .stderr(contains("--file is required"));
}
