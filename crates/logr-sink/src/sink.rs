//! crates/logr-sink/src/sink.rs
//! The capability every backend exposes to the adapter.

use std::sync::Arc;

use super::event::{Event, Record};
use super::level::Level;

/// Destination for finalized records.
///
/// A sink does not gate [`write`](Self::write) itself: callers check
/// [`enabled`](Self::enabled) first when a record is subject to the minimum
/// level, and skip the check for always-on records such as errors.
/// Implementations must be safe to share between threads.
pub trait Sink: Send + Sync {
    /// Writes one record. Failures are handled inside the sink.
    fn write(&self, record: &Record);

    /// Returns the minimum level currently configured for this sink.
    ///
    /// The value is read on every call so runtime changes are observed.
    fn level(&self) -> Level;

    /// Replaces the minimum level, returning the previous one.
    fn set_level(&self, level: Level) -> Level;

    /// Returns `true` when records at `level` pass the minimum.
    fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }
}

impl<S> Sink for Arc<S>
where
    S: Sink + ?Sized,
{
    fn write(&self, record: &Record) {
        (**self).write(record);
    }

    fn level(&self) -> Level {
        (**self).level()
    }

    fn set_level(&self, level: Level) -> Level {
        (**self).set_level(level)
    }

    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }
}

impl dyn Sink + '_ {
    /// Starts an event at `level`.
    pub fn event(&self, level: Level) -> Event<'_> {
        Event::new(self, level)
    }

    /// Starts a trace-level event.
    pub fn trace(&self) -> Event<'_> {
        self.event(Level::Trace)
    }

    /// Starts a debug-level event.
    pub fn debug(&self) -> Event<'_> {
        self.event(Level::Debug)
    }

    /// Starts an info-level event.
    pub fn info(&self) -> Event<'_> {
        self.event(Level::Info)
    }

    /// Starts a warn-level event.
    pub fn warn(&self) -> Event<'_> {
        self.event(Level::Warn)
    }

    /// Starts an error-level event.
    pub fn error(&self) -> Event<'_> {
        self.event(Level::Error)
    }
}
