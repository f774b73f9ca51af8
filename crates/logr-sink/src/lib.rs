#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logr-sink` is the backend half of the workspace: it owns severity
//! [`Level`]s, the process-wide minimum level, the [`Event`] builder and the
//! [`Sink`] trait that finalized [`Record`]s are delivered to. The `logr`
//! crate translates key-value logging calls into events built here.
//!
//! # Design
//!
//! A sink only writes. Gating is the caller's decision: it asks
//! [`Sink::enabled`] before building an event that is subject to the minimum
//! level, and skips the check for records that must always be written.
//! Minimum levels live in [`LevelCell`]s read on every check, so lowering the
//! process-wide level with [`set_global_level`] affects the very next call.
//!
//! Three sinks ship with the crate:
//!
//! - [`JsonSink`] writes newline-delimited JSON, by default to standard error
//!   with a `time` field;
//! - [`MemorySink`] keeps records in memory for assertions;
//! - `TracingSink` (feature `tracing`) re-emits records as `tracing` events.
//!
//! # Invariants
//!
//! - Record fields keep insertion order; duplicate keys are preserved.
//! - Writing never panics and never reports I/O failures to the caller.
//!
//! # Errors
//!
//! Only construction can fail: [`SinkConfig::build`] returns
//! [`SinkInitError`] when a log file cannot be opened, and [`Level`] parsing
//! returns [`ParseLevelError`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logr_sink::{Level, MemorySink, Sink};
//!
//! let memory = Arc::new(MemorySink::new());
//! let sink: Arc<dyn Sink> = memory.clone();
//!
//! let mut event = sink.info();
//! event.int("files", 3);
//! event.msg("scan finished");
//!
//! let records = memory.drain();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].level, Level::Info);
//! ```

mod config;
mod event;
mod global;
mod json;
mod level;
mod memory;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{SinkConfig, SinkInitError, SinkTarget};
pub use event::{ERROR_FIELD, Event, Field, Record, STACK_FIELD};
pub use global::{LevelCell, global_level, set_global_level};
pub use json::{JsonSink, LEVEL_FIELD, MESSAGE_FIELD, TIME_FIELD};
pub use level::{Level, ParseLevelError};
pub use memory::MemorySink;
pub use sink::Sink;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{TARGET, TracingSink};
