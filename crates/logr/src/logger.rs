//! crates/logr/src/logger.rs
//! The front interface application code logs through.

use std::error::Error;

use serde_json::Value;

/// Leveled key-value logger.
///
/// Loggers are values: the `with_*` methods return a new logger and leave
/// the receiver untouched, so a logger can be handed to a subsystem, refined
/// there and dropped without affecting the caller's copy.
///
/// Key-value lists are flat and alternating, `[key1, value1, key2, ...]`.
/// Keys are expected to be strings; see [`encode_fields`](crate::encode_fields)
/// for what happens when they are not.
pub trait Logger: Clone {
    /// Returns `true` when informational records at this logger's
    /// verbosity would be written.
    fn enabled(&self) -> bool;

    /// Logs a non-error message with the given key-value pairs.
    ///
    /// Does nothing, and does not inspect `kv`, when [`enabled`](Self::enabled)
    /// is `false`.
    fn info(&self, msg: &str, kv: &[Value]);

    /// Logs an error with a message and key-value pairs.
    ///
    /// Errors are written regardless of verbosity and minimum level.
    fn error(&self, err: &(dyn Error + 'static), msg: &str, kv: &[Value]);

    /// Returns a logger at the given verbosity. Higher values are more
    /// verbose.
    fn with_verbosity(&self, verbosity: u32) -> Self;

    /// Returns a logger whose name has `name` appended as a new segment.
    ///
    /// Segments are joined with `/`. Callers should not pass names
    /// containing `/`; this is not checked.
    fn with_name(&self, name: &str) -> Self;

    /// Returns a logger that attaches `kv` to every record, after the
    /// pairs already accumulated.
    fn with_values(&self, kv: &[Value]) -> Self;

    /// Shorthand for [`with_verbosity`](Self::with_verbosity).
    fn v(&self, verbosity: u32) -> Self {
        self.with_verbosity(verbosity)
    }
}
