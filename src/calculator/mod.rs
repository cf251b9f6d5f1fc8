//! Calculator module for evaluating arithmetic and scientific expressions.
//!
//! This module provides functionality to:
//! - Validate and normalize display expressions (`×`, `÷`, `−`, function names)
//! - Tokenize and evaluate them with a recursive-descent parser
//! - Format results for display
//! - Inspect an expression that is still being typed

mod detection;
mod error;
mod evaluation;
mod parser;
mod sanitize;
mod tokenizer;

pub use detection::{
    OPERATORS, can_add_decimal, can_add_operator, current_term, ends_with_operator, is_operator,
    last_char, without_current_term,
};
pub use error::CalcError;
pub use evaluation::{CalcResult, PRECISION, evaluate_expression, evaluate_to_display, format_result};
pub use tokenizer::Function;
