//! Keyboard key translation.

use crate::calculator::{Function, is_operator};
use crate::state::CalculatorAction;

/// Translate a physical keyboard key into a calculator action.
///
/// `key` is a key name as reported by the platform: a single character
/// (`"7"`, `"+"`) or a named key (`"Enter"`, `"Backspace"`). ASCII
/// operators are translated to their display glyphs.
pub fn action_for_key(key: &str) -> Option<CalculatorAction> {
    let action = match key {
        "Enter" | "=" => CalculatorAction::Equals,
        "Backspace" | "Delete" => CalculatorAction::Backspace,
        "Escape" => CalculatorAction::ClearAll,
        "." => CalculatorAction::Decimal,
        "(" | ")" => CalculatorAction::number(key),
        "+" => CalculatorAction::operator("+"),
        "-" => CalculatorAction::operator("−"),
        "*" => CalculatorAction::operator("×"),
        "/" => CalculatorAction::operator("÷"),
        _ if key.len() == 1 && key.chars().all(|c| c.is_ascii_digit()) => {
            CalculatorAction::number(key)
        }
        _ => return None,
    };
    Some(action)
}

/// Translate a word typed at the terminal.
///
/// Accepts every keyboard key plus the display glyphs, `^`, function
/// names, `c` (clear the current term) and `ac` (clear everything).
pub fn action_for_word(word: &str) -> Option<CalculatorAction> {
    if let Some(action) = action_for_key(word) {
        return Some(action);
    }

    match word {
        "^" => Some(CalculatorAction::number("^")),
        "c" | "C" => Some(CalculatorAction::Clear),
        "ac" | "AC" => Some(CalculatorAction::ClearAll),
        _ if word.chars().count() == 1 && word.chars().all(is_operator) => {
            Some(CalculatorAction::operator(word))
        }
        _ => Function::from_name(word).map(|func| CalculatorAction::function(func.name())),
    }
}

/// Translate a line of terminal input into actions.
///
/// Words are separated by whitespace. A word that is not itself a key is
/// typed one character at a time, so `12+3=` works as well as `1 2 + 3 =`.
/// Returns the actions and any words that could not be translated.
pub fn actions_for_line(line: &str) -> (Vec<CalculatorAction>, Vec<String>) {
    let mut actions = Vec::new();
    let mut unknown = Vec::new();

    for word in line.split_whitespace() {
        if let Some(action) = action_for_word(word) {
            actions.push(action);
            continue;
        }

        let typed: Option<Vec<CalculatorAction>> = word
            .chars()
            .map(|c| action_for_word(c.encode_utf8(&mut [0; 4])))
            .collect();

        match typed {
            Some(typed) => actions.extend(typed),
            None => unknown.push(word.to_string()),
        }
    }

    (actions, unknown)
}
