//! Errors produced while evaluating an expression.

use thiserror::Error;

/// The two recoverable evaluation failures.
///
/// The `Display` strings are what the calculator shows in place of a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Malformed syntax, a foreign character, unbalanced parentheses,
    /// or a result that is not a number.
    #[error("Invalid Expression")]
    InvalidExpression,
    /// Division by a literal zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(CalcError::InvalidExpression.to_string(), "Invalid Expression");
        assert_eq!(CalcError::DivisionByZero.to_string(), "Cannot divide by zero");
    }
}
