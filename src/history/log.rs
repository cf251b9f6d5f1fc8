//! Bounded, newest-first calculation history.

use std::collections::VecDeque;

use super::entry::HistoryEntry;

/// Default number of entries kept.
pub const DEFAULT_LIMIT: usize = 50;

/// In-memory history of completed calculations, newest first.
#[derive(Clone, Debug)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl HistoryLog {
    /// Create a log that keeps at most `limit` entries.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(DEFAULT_LIMIT)),
            limit,
        }
    }

    /// Store an entry, dropping the oldest one once the limit is reached.
    ///
    /// Returns `false` if the entry was not recordable.
    pub fn record(&mut self, entry: HistoryEntry) -> bool {
        if !entry.is_recordable() || self.limit == 0 {
            return false;
        }

        self.entries.push_front(entry);
        self.entries.truncate(self.limit);
        true
    }

    /// Move every pending entry from `receiver` into the log.
    ///
    /// Returns the number of entries stored.
    pub fn drain(&mut self, receiver: &flume::Receiver<HistoryEntry>) -> usize {
        let mut stored = 0;
        for entry in receiver.try_iter() {
            if self.record(entry) {
                stored += 1;
            }
        }
        stored
    }

    /// Entries from newest to oldest.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
