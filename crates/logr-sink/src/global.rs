//! crates/logr-sink/src/global.rs
//! Atomic minimum-level holders, including the process-wide one.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

use super::level::Level;

static GLOBAL: LevelCell = LevelCell::new(Level::Trace);

/// A minimum [`Level`] that can be read and replaced concurrently.
///
/// Sinks consult a cell on every gate check instead of caching its value, so
/// lowering the minimum at runtime takes effect for the next call.
pub struct LevelCell {
    raw: AtomicU8,
}

impl LevelCell {
    /// Creates a cell holding `level`.
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self {
            raw: AtomicU8::new(level.to_u8()),
        }
    }

    /// Returns the current minimum.
    pub fn get(&self) -> Level {
        Level::from_u8(self.raw.load(Ordering::Relaxed))
    }

    /// Replaces the minimum and returns the previous value.
    pub fn set(&self, level: Level) -> Level {
        Level::from_u8(self.raw.swap(level.to_u8(), Ordering::Relaxed))
    }

    /// Returns the process-wide cell.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }
}

impl Default for LevelCell {
    fn default() -> Self {
        Self::new(Level::Trace)
    }
}

impl fmt::Debug for LevelCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LevelCell").field(&self.get()).finish()
    }
}

/// Returns the process-wide minimum level.
pub fn global_level() -> Level {
    GLOBAL.get()
}

/// Replaces the process-wide minimum level, returning the previous one.
pub fn set_global_level(level: Level) -> Level {
    GLOBAL.set(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_starts_at_given_level() {
        let cell = LevelCell::new(Level::Warn);
        assert_eq!(cell.get(), Level::Warn);
    }

    #[test]
    fn set_returns_previous_level() {
        let cell = LevelCell::default();
        assert_eq!(cell.set(Level::Error), Level::Trace);
        assert_eq!(cell.set(Level::Info), Level::Error);
        assert_eq!(cell.get(), Level::Info);
    }

    #[test]
    fn global_accessors_share_one_cell() {
        let previous = set_global_level(Level::Debug);
        assert_eq!(global_level(), Level::Debug);
        assert_eq!(LevelCell::global().get(), Level::Debug);
        set_global_level(previous);
    }

    #[test]
    fn debug_output_shows_level() {
        assert_eq!(format!("{:?}", LevelCell::new(Level::Info)), "LevelCell(Info)");
    }
}
