//! Actions accepted by the calculator state machine.

use std::fmt;

/// A single user intent, consumed once by [`transition`](super::transition).
///
/// Payloads are optional: a `number`, `operator` or `function` action
/// without one is ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalculatorAction {
    /// Append a digit or a literal parenthesis.
    Number(Option<String>),
    /// Append or replace a display operator (`+ − × ÷`).
    Operator(Option<String>),
    /// Append a function name and its opening parenthesis.
    Function(Option<String>),
    /// Add a decimal point to the current term.
    Decimal,
    /// Evaluate the expression.
    Equals,
    /// Remove the last character.
    Backspace,
    /// Remove the term being typed.
    Clear,
    /// Reset everything.
    ClearAll,
}

impl CalculatorAction {
    pub fn number(value: impl Into<String>) -> Self {
        Self::Number(Some(value.into()))
    }

    pub fn operator(value: impl Into<String>) -> Self {
        Self::Operator(Some(value.into()))
    }

    pub fn function(value: impl Into<String>) -> Self {
        Self::Function(Some(value.into()))
    }

    /// Build an action from its kind name and optional payload.
    ///
    /// Kind names are the camel-case names used by action sources
    /// (`"number"`, `"clearAll"`, ...). Unknown kinds yield `None`.
    pub fn from_kind(kind: &str, value: Option<&str>) -> Option<Self> {
        let value = value.map(str::to_string);
        let action = match kind {
            "number" => Self::Number(value),
            "operator" => Self::Operator(value),
            "function" => Self::Function(value),
            "decimal" => Self::Decimal,
            "equals" => Self::Equals,
            "backspace" => Self::Backspace,
            "clear" => Self::Clear,
            "clearAll" => Self::ClearAll,
            _ => return None,
        };
        Some(action)
    }

    /// The kind name of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Operator(_) => "operator",
            Self::Function(_) => "function",
            Self::Decimal => "decimal",
            Self::Equals => "equals",
            Self::Backspace => "backspace",
            Self::Clear => "clear",
            Self::ClearAll => "clearAll",
        }
    }

    /// The payload carried by this action, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Number(value) | Self::Operator(value) | Self::Function(value) => {
                value.as_deref()
            }
            _ => None,
        }
    }
}

impl fmt::Display for CalculatorAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}({})", self.kind(), value),
            None => write!(f, "{}", self.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kind() {
        assert_eq!(
            CalculatorAction::from_kind("number", Some("7")),
            Some(CalculatorAction::number("7"))
        );
        assert_eq!(
            CalculatorAction::from_kind("operator", None),
            Some(CalculatorAction::Operator(None))
        );
        assert_eq!(
            CalculatorAction::from_kind("clearAll", None),
            Some(CalculatorAction::ClearAll)
        );
        assert_eq!(CalculatorAction::from_kind("memoryRecall", None), None);
    }

    #[test]
    fn test_kind_round_trips() {
        let actions = [
            CalculatorAction::number("1"),
            CalculatorAction::operator("+"),
            CalculatorAction::function("sin"),
            CalculatorAction::Decimal,
            CalculatorAction::Equals,
            CalculatorAction::Backspace,
            CalculatorAction::Clear,
            CalculatorAction::ClearAll,
        ];
        for action in actions {
            let rebuilt = CalculatorAction::from_kind(action.kind(), action.value());
            assert_eq!(rebuilt.as_ref(), Some(&action));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CalculatorAction::operator("×").to_string(), "operator(×)");
        assert_eq!(CalculatorAction::Equals.to_string(), "equals");
    }
}
