//! The pure transition function of the calculator.

use crate::calculator::{
    can_add_decimal, can_add_operator, ends_with_operator, evaluate_expression,
    without_current_term,
};

use super::action::CalculatorAction;
use super::model::{CalculatorState, ZERO, mirrored};
use super::sink::CompletionSink;

/// Apply one action to a state snapshot, producing the next snapshot.
///
/// The only side effect is a call to `sink` after a successful `equals`
/// whose result is not `"0"`. Rejected actions return an unchanged copy.
pub fn transition(
    state: &CalculatorState,
    action: &CalculatorAction,
    sink: Option<&dyn CompletionSink>,
) -> CalculatorState {
    match action {
        CalculatorAction::Number(value) => number(state, value.as_deref()),
        CalculatorAction::Operator(value) => operator(state, value.as_deref()),
        CalculatorAction::Function(value) => function(state, value.as_deref()),
        CalculatorAction::Decimal => decimal(state),
        CalculatorAction::Equals => equals(state, sink),
        CalculatorAction::Backspace => backspace(state),
        CalculatorAction::Clear => clear(state),
        CalculatorAction::ClearAll => CalculatorState::initial(),
    }
}

fn number(state: &CalculatorState, value: Option<&str>) -> CalculatorState {
    let Some(value) = value else {
        return state.clone();
    };

    // Typing after a result starts a new expression.
    if state.has_result && !ends_with_operator(&state.expression) {
        return CalculatorState {
            expression: value.to_string(),
            result: mirrored(value),
            ..CalculatorState::initial()
        };
    }

    let expression = format!("{}{}", state.expression, value);
    CalculatorState {
        result: mirrored(&expression),
        expression,
        has_result: false,
        error: None,
    }
}

fn operator(state: &CalculatorState, value: Option<&str>) -> CalculatorState {
    let Some(value) = value else {
        return state.clone();
    };

    if state.has_result {
        return CalculatorState {
            expression: format!("{}{}", state.result, value),
            result: state.result.clone(),
            has_result: false,
            error: None,
        };
    }

    let mut expression = state.expression.clone();
    if !can_add_operator(&expression) {
        if !ends_with_operator(&expression) {
            return state.clone();
        }
        expression.pop();
    }
    expression.push_str(value);

    CalculatorState {
        expression,
        result: state.result.clone(),
        has_result: false,
        error: None,
    }
}

fn function(state: &CalculatorState, value: Option<&str>) -> CalculatorState {
    let Some(value) = value else {
        return state.clone();
    };

    let opener = if value == "(" || value == ")" { "" } else { "(" };
    let base = if state.has_result && state.expression.is_empty() && state.result != ZERO {
        &state.result
    } else {
        &state.expression
    };

    CalculatorState {
        expression: format!("{}{}{}", base, value, opener),
        result: state.result.clone(),
        has_result: false,
        error: None,
    }
}

fn decimal(state: &CalculatorState) -> CalculatorState {
    if !can_add_decimal(&state.expression) {
        return state.clone();
    }

    let expression = format!("{}.", state.expression);
    CalculatorState {
        result: mirrored(&expression),
        expression,
        has_result: false,
        error: None,
    }
}

fn equals(state: &CalculatorState, sink: Option<&dyn CompletionSink>) -> CalculatorState {
    if state.expression.is_empty() {
        return state.clone();
    }

    match evaluate_expression(&state.expression) {
        Ok(result) => {
            if result != ZERO
                && let Some(sink) = sink
            {
                sink.calculation_completed(&state.expression, &result);
            }
            CalculatorState {
                expression: state.expression.clone(),
                result,
                has_result: true,
                error: None,
            }
        }
        Err(err) => {
            tracing::debug!(expression = %state.expression, %err, "evaluation failed");
            CalculatorState {
                error: Some(err.to_string()),
                has_result: false,
                ..state.clone()
            }
        }
    }
}

fn backspace(state: &CalculatorState) -> CalculatorState {
    if state.has_result {
        return CalculatorState::initial();
    }

    let mut expression = state.expression.clone();
    expression.pop();
    CalculatorState {
        result: mirrored(&expression),
        expression,
        has_result: false,
        error: None,
    }
}

fn clear(state: &CalculatorState) -> CalculatorState {
    if state.expression.is_empty() {
        return CalculatorState::initial();
    }

    let expression = without_current_term(&state.expression).to_string();
    CalculatorState {
        result: mirrored(&expression),
        expression,
        has_result: false,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn run(actions: &[CalculatorAction]) -> CalculatorState {
        actions
            .iter()
            .fold(CalculatorState::initial(), |state, action| {
                transition(&state, action, None)
            })
    }

    fn state(expression: &str, result: &str, has_result: bool) -> CalculatorState {
        CalculatorState {
            expression: expression.to_string(),
            result: result.to_string(),
            has_result,
            error: None,
        }
    }

    fn num(v: &str) -> CalculatorAction {
        CalculatorAction::number(v)
    }

    fn op(v: &str) -> CalculatorAction {
        CalculatorAction::operator(v)
    }

    #[test]
    fn test_number_appends_and_mirrors() {
        let s = run(&[num("1"), num("2")]);
        assert_eq!(s, state("12", "12", false));
    }

    #[test]
    fn test_number_after_result_starts_fresh() {
        let s = run(&[num("2"), op("+"), num("2"), CalculatorAction::Equals, num("7")]);
        assert_eq!(s, state("7", "7", false));
    }

    #[test]
    fn test_number_without_payload_ignored() {
        let before = run(&[num("5")]);
        let after = transition(&before, &CalculatorAction::Number(None), None);
        assert_eq!(after, before);
    }

    #[test]
    fn test_operator_appends_without_touching_result() {
        let s = run(&[num("9"), op("×")]);
        assert_eq!(s, state("9×", "9", false));
    }

    #[test]
    fn test_operator_replaces_trailing_operator() {
        let before = run(&[num("9"), op("×")]);
        let after = transition(&before, &op("−"), None);
        assert_eq!(after.expression(), "9−");
        assert_eq!(after.expression().chars().count(), before.expression().chars().count());
    }

    #[test]
    fn test_operator_rejected_on_empty_or_open_paren() {
        let empty = CalculatorState::initial();
        assert_eq!(transition(&empty, &op("+"), None), empty);

        let open = run(&[num("(")]);
        assert_eq!(transition(&open, &op("+"), None), open);
    }

    #[test]
    fn test_operator_without_payload_ignored() {
        let before = run(&[num("1")]);
        assert_eq!(transition(&before, &CalculatorAction::Operator(None), None), before);
    }

    #[test]
    fn test_operator_chains_off_result() {
        let s = run(&[num("6"), op("×"), num("7"), CalculatorAction::Equals, op("+")]);
        assert_eq!(s, state("42+", "42", false));
    }

    #[test]
    fn test_function_appends_open_paren() {
        let s = run(&[num("2"), op("×"), CalculatorAction::function("sqrt")]);
        assert_eq!(s.expression(), "2×sqrt(");
    }

    #[test]
    fn test_function_parenthesis_token_not_doubled() {
        let s = run(&[CalculatorAction::function("(")]);
        assert_eq!(s.expression(), "(");
    }

    #[test]
    fn test_function_seeds_from_result_when_expression_empty() {
        let seeded = state("", "16", true);
        let s = transition(&seeded, &CalculatorAction::function("sqrt"), None);
        assert_eq!(s, state("16sqrt(", "16", false));

        let zero = state("", "0", true);
        let s = transition(&zero, &CalculatorAction::function("sin"), None);
        assert_eq!(s.expression(), "sin(");
    }

    #[test]
    fn test_decimal_guard() {
        let once = run(&[num("1"), CalculatorAction::Decimal]);
        assert_eq!(once, state("1.", "1.", false));
        let twice = transition(&once, &CalculatorAction::Decimal, None);
        assert_eq!(twice, once);

        let next_term = run(&[num("1"), CalculatorAction::Decimal, num("5"), op("+"), CalculatorAction::Decimal]);
        assert_eq!(next_term.expression(), "1.5+.");
    }

    #[test]
    fn test_equals_success() {
        let s = run(&[num("2"), op("+"), num("2"), CalculatorAction::Equals]);
        assert_eq!(s, state("2+2", "4", true));
    }

    #[test]
    fn test_equals_on_empty_expression_ignored() {
        let empty = CalculatorState::initial();
        assert_eq!(transition(&empty, &CalculatorAction::Equals, None), empty);
    }

    #[test]
    fn test_equals_error_keeps_result() {
        let s = run(&[num("1"), num("0"), op("÷"), num("0"), CalculatorAction::Equals]);
        assert_eq!(s.error(), Some("Cannot divide by zero"));
        assert_eq!(s.result(), "10÷0");
        assert!(!s.has_result());
        assert_eq!(s.display_value(), "Cannot divide by zero");

        let s = run(&[num("2"), op("+"), CalculatorAction::Equals]);
        assert_eq!(s.error(), Some("Invalid Expression"));
    }

    #[test]
    fn test_error_cleared_by_next_action() {
        let failed = run(&[num("2"), op("+"), CalculatorAction::Equals]);
        let s = transition(&failed, &num("3"), None);
        assert_eq!(s.error(), None);
        assert_eq!(s.expression(), "2+3");
    }

    #[test]
    fn test_equals_notifies_sink() {
        let calls = RefCell::new(Vec::new());
        let sink = |expression: &str, result: &str| {
            calls.borrow_mut().push((expression.to_string(), result.to_string()));
        };

        let typed = run(&[num("3"), op("×"), num("4")]);
        transition(&typed, &CalculatorAction::Equals, Some(&sink));
        assert_eq!(*calls.borrow(), vec![("3×4".to_string(), "12".to_string())]);
    }

    #[test]
    fn test_equals_zero_result_not_notified() {
        let calls = RefCell::new(0);
        let sink = |_: &str, _: &str| *calls.borrow_mut() += 1;

        let typed = run(&[num("3"), op("−"), num("3")]);
        let s = transition(&typed, &CalculatorAction::Equals, Some(&sink));
        assert_eq!(s.result(), "0");
        assert!(s.has_result());

        let failed = run(&[num("3"), op("−")]);
        transition(&failed, &CalculatorAction::Equals, Some(&sink));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_backspace() {
        let s = run(&[num("1"), num("2"), CalculatorAction::Backspace]);
        assert_eq!(s, state("1", "1", false));

        let s = run(&[num("1"), CalculatorAction::Backspace]);
        assert_eq!(s, state("", "0", false));

        let s = run(&[CalculatorAction::Backspace]);
        assert!(s.is_initial());
    }

    #[test]
    fn test_backspace_after_result_resets() {
        let s = run(&[num("1"), op("+"), num("1"), CalculatorAction::Equals, CalculatorAction::Backspace]);
        assert!(s.is_initial());
    }

    #[test]
    fn test_clear_truncates_current_term() {
        let s = run(&[num("1"), num("2"), op("+"), num("3"), num("4"), CalculatorAction::Clear]);
        assert_eq!(s, state("12+", "12+", false));

        let s = run(&[num("1"), num("2"), CalculatorAction::Clear]);
        assert_eq!(s, state("", "0", false));
    }

    #[test]
    fn test_clear_on_empty_is_clear_all() {
        let failed = run(&[num("2"), op("+"), CalculatorAction::Equals, CalculatorAction::ClearAll]);
        let s = transition(&failed, &CalculatorAction::Clear, None);
        assert!(s.is_initial());
    }

    #[test]
    fn test_clear_all_from_any_state() {
        let states = [
            CalculatorState::initial(),
            run(&[num("1"), op("+")]),
            run(&[num("1"), op("+"), num("1"), CalculatorAction::Equals]),
            run(&[num("1"), op("÷"), num("0"), CalculatorAction::Equals]),
        ];
        for s in states {
            assert!(transition(&s, &CalculatorAction::ClearAll, None).is_initial());
        }
    }
}
