//! Channel-backed completion sink.

use crate::state::CompletionSink;

use super::entry::HistoryEntry;

/// Forwards completed calculations into a channel without waiting.
///
/// The receiving side (a [`HistoryLog`](super::HistoryLog) or any other
/// store) drains the channel on its own schedule.
#[derive(Clone, Debug)]
pub struct HistoryRecorder {
    sender: flume::Sender<HistoryEntry>,
}

impl HistoryRecorder {
    pub fn new(sender: flume::Sender<HistoryEntry>) -> Self {
        Self { sender }
    }

    /// Create a recorder together with the receiving end of its channel.
    pub fn channel() -> (Self, flume::Receiver<HistoryEntry>) {
        let (sender, receiver) = flume::unbounded();
        (Self::new(sender), receiver)
    }
}

impl CompletionSink for HistoryRecorder {
    fn calculation_completed(&self, expression: &str, result: &str) {
        let entry = HistoryEntry::new(expression, result);
        if let Err(err) = self.sender.try_send(entry) {
            tracing::warn!(%expression, %result, %err, "dropping history entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sends_entry() {
        let (recorder, receiver) = HistoryRecorder::channel();
        recorder.calculation_completed("5×5", "25");

        let entry = receiver.try_recv().unwrap();
        assert_eq!(entry.expression, "5×5");
        assert_eq!(entry.result, "25");
    }

    #[test]
    fn test_disconnected_receiver_is_ignored() {
        let (recorder, receiver) = HistoryRecorder::channel();
        drop(receiver);
        recorder.calculation_completed("1+1", "2");
    }
}
