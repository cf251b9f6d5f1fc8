//! The calculator state snapshot.

use serde::Serialize;

/// Value shown when there is nothing else to show.
pub const ZERO: &str = "0";

/// An immutable snapshot of one calculator session.
///
/// Every action produces a new snapshot; fields are only written by the
/// transition function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    pub(super) expression: String,
    pub(super) result: String,
    pub(super) has_result: bool,
    pub(super) error: Option<String>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::initial()
    }
}

impl CalculatorState {
    /// The state of a fresh session.
    pub fn initial() -> Self {
        Self {
            expression: String::new(),
            result: ZERO.to_string(),
            has_result: false,
            error: None,
        }
    }

    /// The accumulated input, using display glyphs.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// A live echo of the input, or the computed value after `equals`.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Whether the last action was a successful `equals`.
    pub fn has_result(&self) -> bool {
        self.has_result
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// What belongs on the value line: the error if present, else the result.
    pub fn display_value(&self) -> &str {
        self.error.as_deref().unwrap_or(&self.result)
    }

    /// Check if this is the state of a fresh session.
    pub fn is_initial(&self) -> bool {
        *self == Self::initial()
    }
}

/// Mirror an expression into the result line, falling back to zero.
pub(super) fn mirrored(expression: &str) -> String {
    if expression.is_empty() {
        ZERO.to_string()
    } else {
        expression.to_string()
    }
}
