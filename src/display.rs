//! What the display shows for a calculator state.

use serde::Serialize;

use crate::state::{CalculatorState, ZERO};

/// The two lines of the calculator display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    /// The expression line; `"0"` when nothing has been typed.
    pub expression_text: String,
    /// The error if there is one, otherwise the result.
    pub value_text: String,
    /// Whether `value_text` is an error message.
    pub is_error: bool,
}

impl DisplaySnapshot {
    /// Build the display for a state.
    ///
    /// With `group_thousands`, a numeric result gets `,` separators in its
    /// integer part. Errors and live input are shown unchanged.
    pub fn from_state(state: &CalculatorState, group_thousands: bool) -> Self {
        let expression_text = if state.expression().is_empty() {
            ZERO.to_string()
        } else {
            state.expression().to_string()
        };

        let (value_text, is_error) = match state.error() {
            Some(error) => (error.to_string(), true),
            None if group_thousands && state.has_result() => {
                (format_with_separators(state.result()), false)
            }
            None => (state.result().to_string(), false),
        };

        Self {
            expression_text,
            value_text,
            is_error,
        }
    }
}

/// Insert thousands separators into the integer part of a decimal string.
///
/// Strings that are not plain decimal numbers (`Infinity`, `1e+21`) are
/// returned unchanged.
pub fn format_with_separators(value: &str) -> String {
    let (sign, unsigned) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let is_plain = !int_part.is_empty()
        && int_part.chars().all(|c| c.is_ascii_digit())
        && frac_part.is_none_or(|frac| frac.chars().all(|c| c.is_ascii_digit()));
    if !is_plain {
        return value.to_string();
    }

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Calculator, CalculatorAction};

    #[test]
    fn test_empty_expression_shows_zero() {
        let snapshot = DisplaySnapshot::from_state(&CalculatorState::initial(), false);
        assert_eq!(snapshot.expression_text, "0");
        assert_eq!(snapshot.value_text, "0");
        assert!(!snapshot.is_error);
    }

    #[test]
    fn test_error_replaces_result() {
        let mut calc = Calculator::new();
        calc.dispatch_all([
            CalculatorAction::number("1"),
            CalculatorAction::operator("÷"),
            CalculatorAction::number("0"),
            CalculatorAction::Equals,
        ]);
        let snapshot = DisplaySnapshot::from_state(calc.state(), true);
        assert_eq!(snapshot.expression_text, "1÷0");
        assert_eq!(snapshot.value_text, "Cannot divide by zero");
        assert!(snapshot.is_error);
    }

    #[test]
    fn test_grouped_result() {
        let mut calc = Calculator::new();
        calc.dispatch_all([
            CalculatorAction::number("1000"),
            CalculatorAction::operator("×"),
            CalculatorAction::number("1000"),
            CalculatorAction::Equals,
        ]);
        let grouped = DisplaySnapshot::from_state(calc.state(), true);
        assert_eq!(grouped.value_text, "1,000,000");

        let plain = DisplaySnapshot::from_state(calc.state(), false);
        assert_eq!(plain.value_text, "1000000");
    }

    #[test]
    fn test_format_with_separators() {
        assert_eq!(format_with_separators("1234567.25"), "1,234,567.25");
        assert_eq!(format_with_separators("-1234"), "-1,234");
        assert_eq!(format_with_separators("999"), "999");
        assert_eq!(format_with_separators("Infinity"), "Infinity");
        assert_eq!(format_with_separators("1e+21"), "1e+21");
    }
}
