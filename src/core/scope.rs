use crate::core::normalize;
use crate::errors::{AppError, AppResult};
use crate::models::scope::{ALL_SCOPE, ScopeDefinition};
use crate::models::shift::ShiftRecord;

/// `all` matches everything; a keyword scope matches when the compacted
/// event type contains one of its compacted keywords.
pub fn matches(record: &ShiftRecord, scope: &ScopeDefinition) -> bool {
    if scope.is_all() {
        return true;
    }
    let event = normalize::compact(record.event_type());
    scope
        .keywords
        .iter()
        .map(|k| normalize::compact(k))
        .any(|k| !k.is_empty() && event.contains(&k))
}

/// The configured scopes, with `all` always present and first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeSet {
    scopes: Vec<ScopeDefinition>,
}

impl ScopeSet {
    pub fn new(configured: &[ScopeDefinition]) -> Self {
        let mut scopes = vec![ScopeDefinition::all()];
        scopes.extend(configured.iter().filter(|s| !s.is_all()).cloned());
        Self { scopes }
    }

    pub fn get(&self, name: &str) -> AppResult<&ScopeDefinition> {
        self.scopes
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| AppError::UnknownScope(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScopeDefinition> {
        self.scopes.iter()
    }

    /// Names of every scope the record falls into (`all` included).
    pub fn classify(&self, record: &ShiftRecord) -> Vec<&str> {
        self.scopes
            .iter()
            .filter(|s| matches(record, s))
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Keyword scopes must have unique names and must not share a
    /// normalized keyword, otherwise one event family would show up under
    /// two views.
    pub fn validate(&self) -> AppResult<()> {
        let mut seen_names: Vec<&str> = Vec::new();
        let mut seen_keywords: Vec<(String, &str)> = Vec::new();

        for scope in &self.scopes {
            if scope.name.trim().is_empty() {
                return Err(AppError::Config("scope name cannot be empty".into()));
            }
            if seen_names.contains(&scope.name.as_str()) {
                return Err(AppError::Config(format!(
                    "scope '{}' is defined twice",
                    scope.name
                )));
            }
            seen_names.push(&scope.name);

            if scope.name == ALL_SCOPE {
                continue;
            }
            for keyword in &scope.keywords {
                let key = normalize::compact(keyword);
                if key.is_empty() {
                    continue;
                }
                if let Some((_, other)) = seen_keywords
                    .iter()
                    .find(|(k, owner)| *k == key && *owner != scope.name)
                {
                    return Err(AppError::Config(format!(
                        "keyword '{}' is used by both '{}' and '{}'",
                        keyword, other, scope.name
                    )));
                }
                seen_keywords.push((key, &scope.name));
            }
        }

        Ok(())
    }
}
