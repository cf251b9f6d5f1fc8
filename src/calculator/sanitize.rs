//! Pre-parse normalization and grammar-conformance checks.
//!
//! Turns a display expression (`2 × (3 − 1)`) into the plain arithmetic
//! form the tokenizer accepts (`2*(3-1)`), rejecting anything that falls
//! outside the calculator grammar instead of stripping it.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::CalcError;

lazy_static! {
    /// A supported function name immediately followed by its opening parenthesis.
    static ref FUNCTION_CALL: Regex = Regex::new(r"(sqrt|sin|cos|tan|log|ln)\(").unwrap();

    /// Everything that may remain once function names are removed.
    static ref GRAMMAR_CHARS: Regex = Regex::new(r"^[0-9+\-*/.()^\s]*$").unwrap();
}

/// Normalize and validate a display expression.
///
/// Whitespace is removed, display glyphs become their arithmetic
/// equivalents, parentheses must balance, and only digits, operators,
/// `.`, `^`, parentheses and known function names may appear. Redundant
/// leading zeros on integer literals are dropped.
pub fn sanitize(expression: &str) -> Result<String, CalcError> {
    let translated: String = expression
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            other => other,
        })
        .collect();

    let open = translated.matches('(').count();
    let close = translated.matches(')').count();
    if open != close {
        tracing::trace!(open, close, "unbalanced parentheses");
        return Err(CalcError::InvalidExpression);
    }

    let without_functions = FUNCTION_CALL.replace_all(&translated, "(");
    if !GRAMMAR_CHARS.is_match(&without_functions) {
        tracing::trace!(expression = %translated, "foreign characters in expression");
        return Err(CalcError::InvalidExpression);
    }

    Ok(strip_leading_zeros(&translated))
}

/// Drop redundant leading zeros from integer literals (`007` becomes `7`).
///
/// A single zero before a decimal point is kept, and digits after a
/// decimal point are never touched (`10.05` stays as is).
fn strip_leading_zeros(expression: &str) -> String {
    let chars: Vec<char> = expression.chars().collect();
    let mut result = String::with_capacity(expression.len());

    let mut i = 0;
    while i < chars.len() {
        let starts_literal = chars[i].is_ascii_digit()
            && (i == 0 || !(chars[i - 1].is_ascii_digit() || chars[i - 1] == '.'));

        if starts_literal {
            while chars[i] == '0' && chars.get(i + 1).is_some_and(|next| next.is_ascii_digit()) {
                i += 1;
            }
        }

        result.push(chars[i]);
        i += 1;
    }

    result
}
