//! Loading a stored expression back into a calculator.

use crate::calculator::is_operator;
use crate::state::CalculatorAction;

/// The actions that re-type `expression` into a cleared calculator.
///
/// Digits, `.` and parentheses are typed as numbers, display operators as
/// operators. Anything else, such as function names, is skipped.
pub fn recall_actions(expression: &str) -> Vec<CalculatorAction> {
    let mut actions = vec![CalculatorAction::ClearAll];

    for c in expression.chars() {
        let action = match c {
            c if c.is_ascii_digit() || c == '.' || c == '(' || c == ')' => {
                CalculatorAction::number(c.to_string())
            }
            c if is_operator(c) => CalculatorAction::operator(c.to_string()),
            _ => continue,
        };
        actions.push(action);
    }

    actions
}
