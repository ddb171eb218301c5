use serde::{Deserialize, Serialize};

/// How a person reference was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefSource {
    /// Hit in the lookup table.
    Table,
    /// Built by the stopword-stripping heuristic; worth a human look.
    Fallback,
}

/// Normalized person identifier, e.g. `cicco-simonetta`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: String,
    pub source: RefSource,
}

impl PersonRef {
    pub fn table(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: RefSource::Table,
        }
    }

    pub fn fallback(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: RefSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == RefSource::Fallback
    }
}
