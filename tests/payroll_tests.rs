use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use shiftledger::config::Config;
use shiftledger::core::entry::ShiftEntry;
use shiftledger::core::payroll::PayrollRule;
use shiftledger::errors::AppError;

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn rate() -> Decimal {
    Decimal::from(50_000)
}

#[test]
fn test_ot_pay_block_boundaries() {
    let rule = PayrollRule::default();
    assert_eq!(rule.ot_pay(0), Decimal::ZERO);
    assert_eq!(rule.ot_pay(1), rate());
    assert_eq!(rule.ot_pay(15), rate());
    assert_eq!(rule.ot_pay(16), rate() * Decimal::from(2));
    assert_eq!(rule.ot_pay(30), rate() * Decimal::from(2));
    assert_eq!(rule.ot_pay(31), rate() * Decimal::from(3));
}

#[test]
fn test_ot_pay_negative_minutes_is_zero() {
    assert_eq!(PayrollRule::default().ot_pay(-20), Decimal::ZERO);
}

#[test]
fn test_custom_rule() {
    let rule = PayrollRule::new(30, Decimal::from(70_000));
    assert_eq!(rule.ot_pay(29), Decimal::from(70_000));
    assert_eq!(rule.ot_pay(31), Decimal::from(140_000));
}

proptest! {
    #[test]
    fn prop_ot_pay_is_ceil_blocks(m in 0i64..100_000) {
        let rule = PayrollRule::default();
        let blocks = (m + 14) / 15;
        prop_assert_eq!(rule.ot_pay(m), Decimal::from(blocks) * rate());
    }

    #[test]
    fn prop_partial_block_never_rounds_down(m in 1i64..100_000) {
        let rule = PayrollRule::default();
        // the billed time always covers the worked time
        prop_assert!(rule.blocks(m) * 15 >= m);
        prop_assert!(rule.blocks(m) * 15 - m < 15);
    }
}

#[test]
fn test_ot_minutes_between_rounds_up_to_blocks() {
    let rule = PayrollRule::default();
    let day = d("2024-05-30");
    assert_eq!(rule.ot_minutes_between(day, t("19:30"), t("23:00"), t("22:45")), 0);
    assert_eq!(rule.ot_minutes_between(day, t("19:30"), t("23:00"), t("23:00")), 0);
    assert_eq!(rule.ot_minutes_between(day, t("19:30"), t("23:00"), t("23:01")), 15);
    assert_eq!(rule.ot_minutes_between(day, t("19:30"), t("23:00"), t("23:15")), 15);
    assert_eq!(rule.ot_minutes_between(day, t("19:30"), t("23:00"), t("23:16")), 30);
}

#[test]
fn test_ot_minutes_between_past_midnight() {
    let rule = PayrollRule::default();
    let day = d("2024-05-30");
    // 23:00 → 00:20 next day = 80 min → 6 blocks
    assert_eq!(rule.ot_minutes_between(day, t("19:30"), t("23:00"), t("00:20")), 90);
}

#[test]
fn test_entry_self_performed_ignores_worker_payment() {
    let cfg = Config::default();
    let entry = ShiftEntry {
        date: "2024-05-30".into(),
        venue: "Hanoi Rock City".into(),
        shift_key: "dem_nhac".into(),
        outsourced: false,
        actual_end: "23:10".into(),
        worker_payment: 300_000,
    };

    let rec = entry.compute(&cfg).expect("compute");
    assert_eq!(rec.event_type(), "Đêm nhạc");
    assert_eq!(rec.performed_by(), "Tự làm");
    assert_eq!(rec.start_time(), "19:30");
    assert_eq!(rec.scheduled_end_time(), "23:00");
    assert_eq!(rec.ot_minutes(), 15);
    assert_eq!(rec.ot_pay(), Decimal::from(50_000));
    assert_eq!(rec.total_pay(), Decimal::from(650_000));
    assert_eq!(rec.worker_payment(), Decimal::ZERO);
    assert_eq!(rec.net_income(), Decimal::from(650_000));
}

#[test]
fn test_entry_outsourced_net_income() {
    let cfg = Config::default();
    let entry = ShiftEntry {
        date: "2024-06-01".into(),
        venue: "Binh Quoi".into(),
        shift_key: "openmic".into(),
        outsourced: true,
        actual_end: "22:50".into(),
        worker_payment: 300_000,
    };

    let rec = entry.compute(&cfg).expect("compute");
    assert_eq!(rec.performed_by(), "Thuê ngoài");
    assert_eq!(rec.ot_minutes(), 30);
    assert_eq!(rec.total_pay(), Decimal::from(600_000));
    assert_eq!(rec.net_income(), Decimal::from(300_000));
    assert_eq!(rec.net_income() + rec.worker_payment(), rec.total_pay());
}

#[test]
fn test_entry_rejects_bad_input() {
    let cfg = Config::default();
    let base = ShiftEntry {
        date: "2024-06-01".into(),
        venue: "Binh Quoi".into(),
        shift_key: "openmic".into(),
        outsourced: false,
        actual_end: "22:50".into(),
        worker_payment: 0,
    };

    let bad_date = ShiftEntry {
        date: "2024-13-01".into(),
        ..base.clone()
    };
    assert!(matches!(bad_date.compute(&cfg), Err(AppError::InvalidDate(_))));

    let bad_time = ShiftEntry {
        actual_end: "25:99".into(),
        ..base.clone()
    };
    assert!(matches!(bad_time.compute(&cfg), Err(AppError::InvalidTime(_))));

    let bad_type = ShiftEntry {
        shift_key: "karaoke".into(),
        ..base
    };
    assert!(matches!(
        bad_type.compute(&cfg),
        Err(AppError::UnknownShiftType(_))
    ));
}
