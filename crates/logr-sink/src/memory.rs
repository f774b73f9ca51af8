//! crates/logr-sink/src/memory.rs
//! In-memory sink that keeps every record for later inspection.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::event::Record;
use super::global::LevelCell;
use super::level::Level;
use super::sink::Sink;

/// Sink collecting records in memory.
///
/// Each instance owns its minimum level (default [`Level::Trace`]) so tests
/// can change it without touching process-wide state.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
    level: LevelCell,
}

impl MemorySink {
    /// Creates an empty sink accepting every level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sink with the given minimum level.
    #[must_use]
    pub fn with_level(level: Level) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            level: LevelCell::new(level),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the records written so far.
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Removes and returns every record written so far.
    pub fn drain(&self) -> Vec<Record> {
        self.lock().drain(..).collect()
    }

    /// Returns the number of records written so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn write(&self, record: &Record) {
        self.lock().push(record.clone());
    }

    fn level(&self) -> Level {
        self.level.get()
    }

    fn set_level(&self, level: Level) -> Level {
        self.level.set(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(message: &str) -> Record {
        Record {
            level: Level::Info,
            fields: Vec::new(),
            message: message.to_owned(),
        }
    }

    #[test]
    fn write_and_drain() {
        let sink = MemorySink::new();
        sink.write(&record("one"));
        sink.write(&record("two"));
        assert_eq!(sink.len(), 2);

        let drained = sink.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "one");
        assert_eq!(drained[1].message, "two");

        // Records should be drained
        assert!(sink.is_empty());
    }

    #[test]
    fn records_leaves_buffer_intact() {
        let sink = MemorySink::new();
        sink.write(&record("kept"));
        assert_eq!(sink.records().len(), 1);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn with_level_sets_own_minimum() {
        let sink = MemorySink::with_level(Level::Error);
        assert_eq!(sink.level(), Level::Error);
        assert!(!sink.enabled(Level::Warn));
    }
}
