//! A completed calculation kept in history.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A completed calculation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression as it was typed, with display glyphs.
    pub expression: String,
    /// The formatted result.
    pub result: String,
    /// Seconds since the Unix epoch.
    pub created_at: u64,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::at(expression, result, created_at)
    }

    /// Create an entry with an explicit timestamp.
    pub fn at(expression: impl Into<String>, result: impl Into<String>, created_at: u64) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            created_at,
        }
    }

    /// Entries without an expression or a result are never stored.
    pub fn is_recordable(&self) -> bool {
        !self.expression.is_empty() && !self.result.is_empty()
    }
}
