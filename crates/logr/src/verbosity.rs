//! crates/logr/src/verbosity.rs
//! Mapping from logger verbosity to sink severity.

use logr_sink::Level;

/// Lowest verbosity logged at [`Level::Debug`].
pub const DEBUG_THRESHOLD: u32 = 2;
/// Lowest verbosity logged at [`Level::Trace`].
pub const TRACE_THRESHOLD: u32 = 8;

/// Returns the sink level used for informational records at `verbosity`.
///
/// | verbosity | level |
/// |-----------|-------|
/// | 0–1       | info  |
/// | 2–7       | debug |
/// | 8+        | trace |
#[must_use]
pub const fn tier(verbosity: u32) -> Level {
    if verbosity < DEBUG_THRESHOLD {
        Level::Info
    } else if verbosity < TRACE_THRESHOLD {
        Level::Debug
    } else {
        Level::Trace
    }
}
