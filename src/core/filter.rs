use crate::core::scope;
use crate::models::filter::{FilterState, Selection};
use crate::models::scope::ScopeDefinition;
use crate::models::shift::ShiftRecord;
use std::collections::BTreeSet;

pub fn in_month(record: &ShiftRecord, month: &Selection) -> bool {
    match month {
        Selection::All => true,
        Selection::Only(m) => record.month() == m,
    }
}

pub fn has_event_type(record: &ShiftRecord, event_type: &Selection) -> bool {
    match event_type {
        Selection::All => true,
        Selection::Only(e) => record.event_type() == e,
    }
}

/// Records visible under `state`, in input order.
///
/// The three predicates are independent per record, so the order they are
/// listed in has no effect on the result.
pub fn apply<'a>(
    records: &'a [ShiftRecord],
    state: &FilterState,
    scope_def: &ScopeDefinition,
) -> Vec<&'a ShiftRecord> {
    records
        .iter()
        .filter(|r| scope::matches(r, scope_def))
        .filter(|r| in_month(r, &state.month))
        .filter(|r| has_event_type(r, &state.event_type))
        .collect()
}

/// Records of a scope, ignoring month and event type (used for selectors).
pub fn in_scope<'a>(records: &'a [ShiftRecord], scope_def: &ScopeDefinition) -> Vec<&'a ShiftRecord> {
    records.iter().filter(|r| scope::matches(r, scope_def)).collect()
}

/// Distinct `YYYY-MM` values, newest first.
pub fn available_months(records: &[&ShiftRecord]) -> Vec<String> {
    let months: BTreeSet<&str> = records.iter().map(|r| r.month()).collect();
    months.into_iter().rev().map(str::to_string).collect()
}

/// Distinct non-empty event types, sorted.
pub fn available_event_types(records: &[&ShiftRecord]) -> Vec<String> {
    let types: BTreeSet<&str> = records
        .iter()
        .map(|r| r.event_type())
        .filter(|e| !e.is_empty())
        .collect();
    types.into_iter().map(str::to_string).collect()
}
