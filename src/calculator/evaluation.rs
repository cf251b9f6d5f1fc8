//! Expression evaluation and result formatting.
//!
//! Evaluation runs in fixed stages: sanitize the display expression,
//! tokenize it, reject literal division by zero, evaluate with the
//! recursive-descent parser, then format the number for display.
//!
//! Thousands grouping for the display is in
//! [`display::format_with_separators`](crate::display::format_with_separators).

use serde::Serialize;

use super::error::CalcError;
use super::parser::{divides_by_literal_zero, evaluate_tokens};
use super::sanitize::sanitize;
use super::tokenizer::tokenize;

/// Results are rounded to this many decimal places.
pub const PRECISION: usize = 7;

/// `10^PRECISION`.
const SCALE: f64 = 10_000_000.0;

/// Beyond this magnitude an `f64` carries no fractional digits worth rounding.
const ROUNDING_LIMIT: f64 = 1e15;

/// Beyond this magnitude results are shown in exponent form.
const EXPONENT_LIMIT: f64 = 1e21;

/// Outcome of evaluating an expression, with the input kept alongside.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalcResult {
    /// Successful calculation.
    Success {
        /// The original expression.
        expression: String,
        /// The formatted result.
        result: String,
    },
    /// Evaluation failed.
    Error {
        /// The original expression.
        expression: String,
        /// Error message to display.
        #[serde(rename = "error")]
        message: String,
    },
}

impl CalcResult {
    /// Evaluate `expression` and keep it with the outcome.
    pub fn evaluate(expression: &str) -> Self {
        match evaluate_expression(expression) {
            Ok(result) => Self::Success {
                expression: expression.to_string(),
                result,
            },
            Err(err) => Self::Error {
                expression: expression.to_string(),
                message: err.to_string(),
            },
        }
    }

    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { result, .. } => result,
            Self::Error { message, .. } => message,
        }
    }
}

/// Evaluate a display expression such as `2×(3−1)` or `sqrt(16)`.
///
/// Every failure resolves to a [`CalcError`]; nothing panics on malformed
/// input. Infinite results are successes rendered as `Infinity` or
/// `-Infinity`.
pub fn evaluate_expression(expression: &str) -> Result<String, CalcError> {
    let sanitized = sanitize(expression)?;
    let tokens = tokenize(&sanitized)?;

    if divides_by_literal_zero(&tokens) {
        return Err(CalcError::DivisionByZero);
    }

    let value = evaluate_tokens(&tokens)?;
    tracing::trace!(%sanitized, value, "evaluated expression");
    format_result(value)
}

/// Evaluate and collapse the outcome into the string shown to the user.
pub fn evaluate_to_display(expression: &str) -> String {
    evaluate_expression(expression).unwrap_or_else(|err| err.to_string())
}

/// Format a computed value for display.
///
/// `NaN` is an invalid expression. Finite values are rounded to
/// [`PRECISION`] decimal places and printed without trailing zeros.
pub fn format_result(value: f64) -> Result<String, CalcError> {
    if value.is_nan() {
        return Err(CalcError::InvalidExpression);
    }

    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return Ok(text.to_string());
    }

    if value.abs() >= EXPONENT_LIMIT {
        return Ok(format_exponent(value));
    }

    let rounded = if value.abs() >= ROUNDING_LIMIT {
        value
    } else {
        // Ties round toward positive infinity.
        (value * SCALE + 0.5).floor() / SCALE
    };

    // Shortest round-trip form: no exponent and no binary noise digits.
    if rounded == 0.0 {
        Ok("0".to_string())
    } else {
        Ok(format!("{}", rounded))
    }
}

/// Exponent notation with an explicit sign on the exponent, e.g. `1e+21`.
fn format_exponent(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
