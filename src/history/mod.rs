//! Calculation history.
//!
//! The calculator reports completed calculations through a
//! [`CompletionSink`](crate::state::CompletionSink). [`HistoryRecorder`]
//! forwards them over a channel and [`HistoryLog`] keeps the most recent
//! ones.

mod entry;
mod log;
mod recall;
mod recorder;

pub use entry::HistoryEntry;
pub use log::{DEFAULT_LIMIT, HistoryLog};
pub use recall::recall_actions;
pub use recorder::HistoryRecorder;
