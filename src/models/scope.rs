use serde::{Deserialize, Serialize};

/// Name of the scope that matches every record.
pub const ALL_SCOPE: &str = "all";

/// A statically configured dashboard view over the shift records.
///
/// An empty keyword list is only meaningful for the `all` scope; any other
/// scope without keywords matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeDefinition {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ScopeDefinition {
    pub fn all() -> Self {
        Self {
            name: ALL_SCOPE.to_string(),
            label: "All shifts".to_string(),
            keywords: Vec::new(),
        }
    }

    pub fn keyword(name: &str, label: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.name == ALL_SCOPE
    }

    /// Label for display, falling back to the name.
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}
