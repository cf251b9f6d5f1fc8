//! Inspection helpers for an expression that is still being typed.
//!
//! The state machine uses these to decide whether a keystroke may extend
//! the expression, replace its tail, or must be ignored.

use lazy_static::lazy_static;
use regex::Regex;

/// The display glyphs for the four arithmetic operators.
pub const OPERATORS: [char; 4] = ['+', '−', '×', '÷'];

lazy_static! {
    /// Everything up to and including the last operator or opening parenthesis.
    static ref TERM_PREFIX: Regex = Regex::new(r"^.*[+−×÷(]").unwrap();

    /// The trailing run of characters after the last operator, parenthesis or caret.
    static ref CURRENT_TERM: Regex = Regex::new(r"[^+−×÷()^]*$").unwrap();
}

/// Check if a character is one of the display operators.
pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

/// The last character of the expression, if any.
pub fn last_char(expression: &str) -> Option<char> {
    expression.chars().next_back()
}

/// Check if the expression currently ends with a display operator.
pub fn ends_with_operator(expression: &str) -> bool {
    last_char(expression).is_some_and(is_operator)
}

/// Check if an operator may be appended as-is.
///
/// Not allowed on an empty expression, after another operator, or right
/// after an opening parenthesis.
pub fn can_add_operator(expression: &str) -> bool {
    match last_char(expression) {
        Some(c) => !is_operator(c) && c != '(',
        None => false,
    }
}

/// The numeric term currently being typed.
pub fn current_term(expression: &str) -> &str {
    CURRENT_TERM
        .find(expression)
        .map_or(expression, |m| m.as_str())
}

/// Check if a decimal point may be added to the current term.
pub fn can_add_decimal(expression: &str) -> bool {
    !current_term(expression).contains('.')
}

/// The expression with its trailing partial term removed.
///
/// Keeps everything up to and including the last operator or opening
/// parenthesis; an expression without either becomes empty.
pub fn without_current_term(expression: &str) -> &str {
    TERM_PREFIX
        .find(expression)
        .map_or("", |m| m.as_str())
}
