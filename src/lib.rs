#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # zerologr
//!
//! A leveled key-value logger writing structured JSON events.
//!
//! This crate bundles the workspace: the [`Logger`] interface and its
//! [`LoggerAdapter`] implementation from `logr`, re-exported at the root, and
//! the sink side under [`sink`]. [`new`] gives a logger writing timestamped
//! JSON lines to standard error; [`new_with_options`] accepts a name and any
//! [`sink::Sink`].
//!
//! ```
//! use std::sync::Arc;
//! use zerologr::sink::MemorySink;
//! use zerologr::{kv, Logger, Options};
//!
//! let memory = Arc::new(MemorySink::new());
//! let log = zerologr::new_with_options(Options::new().name("api").sink(memory.clone()));
//! log.with_name("users").info("created", &kv!["id", 42]);
//!
//! let record = &memory.drain()[0];
//! assert_eq!(record.field("name"), Some(&serde_json::json!("api/users")));
//! ```

pub use logr::*;
pub use logr_sink as sink;

/// Returns a root logger writing timestamped JSON lines to standard error.
///
/// Records are gated by the process-wide minimum level, see
/// [`sink::set_global_level`].
#[must_use]
pub fn new() -> LoggerAdapter {
    LoggerAdapter::new()
}

/// Returns a root logger built from `options`.
#[must_use]
pub fn new_with_options(options: Options) -> LoggerAdapter {
    LoggerAdapter::with_options(options)
}
