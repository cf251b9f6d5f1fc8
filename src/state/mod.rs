//! Calculator state machine.
//!
//! Keystrokes arrive as [`CalculatorAction`]s; [`transition`] maps a state
//! snapshot and an action to the next snapshot. [`Calculator`] wraps the
//! current snapshot and the completion callback for a single session.

mod action;
mod model;
mod session;
mod sink;
mod transition;

pub use action::CalculatorAction;
pub use model::{CalculatorState, ZERO};
pub use session::Calculator;
pub use sink::CompletionSink;
pub use transition::transition;
