//! # pocketcalc
//!
//! The core of a keystroke-driven scientific calculator.
//!
//! - [`calculator`] evaluates display expressions such as `2×(3−1)` or
//!   `sqrt(16)` with a recursive-descent parser, after a grammar check that
//!   rejects anything outside digits, the four operators, `^`, parentheses
//!   and the functions `sin cos tan log ln sqrt`.
//! - [`state`] is the input state machine: each [`CalculatorAction`] turns
//!   one [`CalculatorState`] snapshot into the next.
//! - [`history`], [`input`] and [`display`] are the collaborators around the
//!   core: the completion sink, the key source and the display consumer.
//!
//! ```
//! use pocketcalc::{Calculator, CalculatorAction};
//!
//! let mut calc = Calculator::new();
//! calc.dispatch(CalculatorAction::number("6"));
//! calc.dispatch(CalculatorAction::operator("×"));
//! calc.dispatch(CalculatorAction::number("7"));
//! assert_eq!(calc.dispatch(CalculatorAction::Equals).result(), "42");
//! ```

pub mod calculator;
pub mod config;
pub mod display;
pub mod history;
pub mod input;
pub mod state;

pub use calculator::{CalcError, evaluate_expression};
pub use state::{Calculator, CalculatorAction, CalculatorState, CompletionSink};
