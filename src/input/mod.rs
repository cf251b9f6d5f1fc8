//! Translation of raw user input into calculator actions.

mod keyboard;

pub use keyboard::{action_for_key, action_for_word, actions_for_line};
