mod common;
use common::{record, sample_records, shift};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use shiftledger::config::Config;
use shiftledger::core::filter;
use shiftledger::core::normalize::{compact, contains, normalize};
use shiftledger::core::scope::{self, ScopeSet};
use shiftledger::errors::AppError;
use shiftledger::models::filter::{FilterState, Selection, parse_month};
use shiftledger::models::scope::ScopeDefinition;

fn default_scopes() -> ScopeSet {
    Config::default().scope_set()
}

#[test]
fn test_normalize_folds_case_diacritics_and_stroke_d() {
    assert_eq!(normalize("ĐÊM NHẠC"), "dem nhac");
    assert_eq!(normalize("Đêm nhạc"), normalize("dem nhac"));
    assert_eq!(normalize("Thuê ngoài"), "thue ngoai");
    assert_eq!(normalize(""), "");
    assert_eq!(compact(" Open  Mic "), "openmic");
}

#[test]
fn test_contains_ignores_spacing() {
    assert!(contains("Đêm nhạc Acoustic", "dem nhac"));
    assert!(contains("Open Mic night", "openmic"));
    assert!(contains("Tự làm", "tu lam"));
    assert!(!contains("Openmic", ""));
    assert!(!contains("", "openmic"));
}

#[test]
fn test_keyword_scope_matches_variants() {
    let scopes = default_scopes();
    let dem_nhac = scopes.get("dem_nhac").unwrap();
    let open_mic = scopes.get("open_mic").unwrap();

    for event in ["ĐÊM NHẠC", "dem nhac", "Đêm nhạc", "demnhac"] {
        let r = record(&[("date", "2024-01-01"), ("event_type", event)]);
        assert!(scope::matches(&r, dem_nhac), "{event}");
        assert!(!scope::matches(&r, open_mic), "{event}");
    }
    for event in ["Openmic", "Open mic", "OPEN MIC"] {
        let r = record(&[("date", "2024-01-01"), ("event_type", event)]);
        assert!(scope::matches(&r, open_mic), "{event}");
    }
}

#[test]
fn test_all_scope_matches_everything() {
    let scopes = default_scopes();
    let all = scopes.get("all").unwrap();
    let blank = record(&[("date", "2024-01-01")]);
    assert!(scope::matches(&blank, all));
    assert_eq!(scopes.classify(&blank), vec!["all"]);
}

#[test]
fn test_classify_lists_every_matching_scope() {
    let scopes = ScopeSet::new(&[
        ScopeDefinition::keyword("music", "Music", &["nhac"]),
        ScopeDefinition::keyword("night", "Night", &["dem"]),
    ]);
    let r = record(&[("date", "2024-01-01"), ("event_type", "Đêm nhạc")]);
    assert_eq!(scopes.classify(&r), vec!["all", "music", "night"]);
}

#[test]
fn test_unknown_scope_is_an_error() {
    let err = default_scopes().get("karaoke").unwrap_err();
    assert!(matches!(err, AppError::UnknownScope(name) if name == "karaoke"));
}

#[test]
fn test_scope_set_always_starts_with_all() {
    let scopes = ScopeSet::new(&[
        ScopeDefinition::keyword("open_mic", "Open mic", &["openmic"]),
        ScopeDefinition::all(),
    ]);
    let names: Vec<&str> = scopes.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["all", "open_mic"]);
}

#[test]
fn test_validate_rejects_shared_keywords() {
    let scopes = ScopeSet::new(&[
        ScopeDefinition::keyword("a", "A", &["Open mic"]),
        ScopeDefinition::keyword("b", "B", &["openmic"]),
    ]);
    assert!(matches!(scopes.validate(), Err(AppError::Config(_))));

    let dup = ScopeSet::new(&[
        ScopeDefinition::keyword("a", "A", &["x"]),
        ScopeDefinition::keyword("a", "A again", &["y"]),
    ]);
    assert!(matches!(dup.validate(), Err(AppError::Config(_))));

    assert!(default_scopes().validate().is_ok());
}

#[test]
fn test_open_mic_view_of_sample() {
    let records = sample_records();
    let scopes = default_scopes();
    let state = FilterState::default().with_scope("open_mic");

    let visible = filter::apply(&records, &state, scopes.get(&state.scope).unwrap());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].date(), "2024-01-20");
}

#[test]
fn test_month_and_event_type_filters() {
    let records = sample_records();
    let scopes = default_scopes();
    let all = scopes.get("all").unwrap();

    let jan = FilterState::default().with_month(Selection::Only("2024-01".into()));
    let dates: Vec<&str> = filter::apply(&records, &jan, all)
        .iter()
        .map(|r| r.date())
        .collect();
    assert_eq!(dates, vec!["2024-01-05", "2024-01-20"]);

    let dem = FilterState::default().with_event_type(Selection::Only("Đêm nhạc".into()));
    assert_eq!(filter::apply(&records, &dem, all).len(), 2);

    let none = FilterState::default().with_month(Selection::Only("2023-12".into()));
    assert!(filter::apply(&records, &none, all).is_empty());
}

#[test]
fn test_available_selectors() {
    let records = sample_records();
    let refs: Vec<_> = records.iter().collect();
    assert_eq!(filter::available_months(&refs), vec!["2024-02", "2024-01"]);
    assert_eq!(
        filter::available_event_types(&refs),
        vec!["Openmic".to_string(), "Đêm nhạc".to_string()]
    );
}

fn arb_records() -> impl Strategy<Value = Vec<shiftledger::models::shift::ShiftRecord>> {
    let event = prop::sample::select(vec!["Đêm nhạc", "Openmic", "Open mic", "Private"]);
    let month = prop::sample::select(vec!["2024-01", "2024-02", "2024-03"]);
    prop::collection::vec((month, 1u32..28, event, 0i64..90), 0..25).prop_map(|rows| {
        rows.into_iter()
            .map(|(m, d, e, ot)| {
                shift(
                    &format!("{m}-{d:02}"),
                    e,
                    "Tự làm",
                    "500000",
                    &ot.to_string(),
                    "0",
                )
            })
            .collect()
    })
}

fn arb_state() -> impl Strategy<Value = FilterState> {
    let scope = prop::sample::select(vec!["all", "dem_nhac", "open_mic"]);
    let month = prop::sample::select(vec!["all", "2024-01", "2024-02"]);
    let event = prop::sample::select(vec!["all", "Openmic", "Đêm nhạc"]);
    (scope, month, event).prop_map(|(s, m, e)| {
        FilterState::new(s, Selection::parse(m), Selection::parse(e))
    })
}

proptest! {
    #[test]
    fn prop_filter_is_idempotent(records in arb_records(), state in arb_state()) {
        let scopes = default_scopes();
        let def = scopes.get(&state.scope).unwrap();
        let once: Vec<_> = filter::apply(&records, &state, def).into_iter().cloned().collect();
        let twice: Vec<_> = filter::apply(&once, &state, def).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_filter_order_does_not_matter(records in arb_records(), state in arb_state()) {
        let scopes = default_scopes();
        let def = scopes.get(&state.scope).unwrap();
        let combined: Vec<_> = filter::apply(&records, &state, def).into_iter().cloned().collect();

        // event type, then month, then scope
        let by_event: Vec<_> = records
            .iter()
            .filter(|r| filter::has_event_type(r, &state.event_type))
            .cloned()
            .collect();
        let by_month: Vec<_> = by_event
            .iter()
            .filter(|r| filter::in_month(r, &state.month))
            .cloned()
            .collect();
        let by_scope: Vec<_> = by_month
            .iter()
            .filter(|r| scope::matches(r, def))
            .cloned()
            .collect();
        prop_assert_eq!(combined, by_scope);
    }
}

#[test]
fn test_parse_month() {
    assert_eq!(parse_month("all").unwrap(), Selection::All);
    assert_eq!(parse_month("").unwrap(), Selection::All);
    assert_eq!(
        parse_month("2024-01").unwrap(),
        Selection::Only("2024-01".into())
    );
    assert!(matches!(parse_month("2024-13"), Err(AppError::InvalidMonth(_))));
    assert!(matches!(parse_month("Jan 2024"), Err(AppError::InvalidMonth(_))));
}

#[test]
fn test_query_round_trip_omits_all() {
    assert_eq!(FilterState::default().to_query(), "");

    let state = FilterState::default()
        .with_scope("open_mic")
        .with_month(Selection::Only("2024-01".into()));
    assert_eq!(state.to_query(), "view=open_mic&month=2024-01");
    assert_eq!(FilterState::from_query(&state.to_query()).unwrap(), state);

    let month_only = FilterState::default().with_month(Selection::Only("2024-02".into()));
    assert_eq!(month_only.to_query(), "month=2024-02");
}

#[test]
fn test_from_query_accepts_prefix_and_ignores_unknown_keys() {
    let state = FilterState::from_query("?view=dem_nhac&month=all&tab=2").unwrap();
    assert_eq!(state.scope, "dem_nhac");
    assert_eq!(state.month, Selection::All);
    assert_eq!(state.event_type, Selection::All);

    assert_eq!(FilterState::from_query("").unwrap(), FilterState::default());
}

#[test]
fn test_from_query_rejects_bad_month() {
    let err = FilterState::from_query("view=all&month=2024-1").unwrap_err();
    assert!(matches!(err, AppError::InvalidQuery(_)));
}

#[test]
fn test_blank_scope_falls_back_to_all() {
    let state = FilterState::default().with_scope("  ");
    assert_eq!(state.scope, "all");
}
