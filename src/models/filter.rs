use crate::errors::{AppError, AppResult};
use crate::models::scope::ALL_SCOPE;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A selector that is either unrestricted or pinned to one value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// `"all"` (any case) or an empty string means unrestricted.
    pub fn parse(value: &str) -> Self {
        let v = value.trim();
        if v.is_empty() || v.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Only(v.to_string())
        }
    }

    pub fn as_option(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(v.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Only(v) => f.write_str(v),
        }
    }
}

fn month_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").expect("valid month regex"))
}

/// Validate a `YYYY-MM` month selector (or "all").
pub fn parse_month(value: &str) -> AppResult<Selection> {
    match Selection::parse(value) {
        Selection::All => Ok(Selection::All),
        Selection::Only(m) if month_regex().is_match(&m) => Ok(Selection::Only(m)),
        Selection::Only(m) => Err(AppError::InvalidMonth(m)),
    }
}

/// The (scope, month, event type) triple that decides which records are
/// visible. Replaced wholesale on each change, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub scope: String,
    pub month: Selection,
    pub event_type: Selection,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            scope: ALL_SCOPE.to_string(),
            month: Selection::All,
            event_type: Selection::All,
        }
    }
}

impl FilterState {
    pub fn new(scope: &str, month: Selection, event_type: Selection) -> Self {
        let scope = scope.trim();
        Self {
            scope: if scope.is_empty() {
                ALL_SCOPE.to_string()
            } else {
                scope.to_string()
            },
            month,
            event_type,
        }
    }

    pub fn with_scope(&self, scope: &str) -> Self {
        Self::new(scope, self.month.clone(), self.event_type.clone())
    }

    pub fn with_month(&self, month: Selection) -> Self {
        Self::new(&self.scope, month, self.event_type.clone())
    }

    pub fn with_event_type(&self, event_type: Selection) -> Self {
        Self::new(&self.scope, self.month.clone(), event_type)
    }

    /// Seed a state from the persisted query string (`view=...&month=...`).
    ///
    /// A leading `?` is accepted. Unknown parameters are ignored; a malformed
    /// month is an error.
    pub fn from_query(query: &str) -> AppResult<Self> {
        let query = query.trim().trim_start_matches('?');
        let mut state = FilterState::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "view" => state = state.with_scope(&value),
                "month" => {
                    let month = parse_month(&value)
                        .map_err(|_| AppError::InvalidQuery(format!("month={value}")))?;
                    state = state.with_month(month);
                }
                other => log::debug!("ignoring query parameter '{other}'"),
            }
        }

        Ok(state)
    }

    /// Query string persisting `view` and `month`; values equal to "all"
    /// are left out.
    pub fn to_query(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        if self.scope != ALL_SCOPE {
            ser.append_pair("view", &self.scope);
        }
        if let Selection::Only(m) = &self.month {
            ser.append_pair("month", m);
        }
        ser.finish()
    }
}
