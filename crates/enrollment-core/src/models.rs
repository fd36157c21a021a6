use serde::{Deserialize, Serialize};

/// A school known to the dataset, identified by its board-issued code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchoolRecord {
    /// Human-readable school name as published by the board.
    pub name: String,
    /// Unique integer school code.
    pub code: u32,
}

impl SchoolRecord {
    pub fn new(name: impl Into<String>, code: u32) -> Self {
        Self {
            name: name.into(),
            code,
        }
    }

    /// The name trimmed and lower-cased, used for case-insensitive matching.
    pub fn normalized_name(&self) -> String {
        normalize(&self.name)
    }
}

/// Trim surrounding whitespace and lower-case `raw`.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
