#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logr` provides a leveled key-value logging interface, [`Logger`], and
//! [`LoggerAdapter`], which implements it on top of any
//! [`Sink`](logr_sink::Sink). Application code logs messages with flat
//! `[key, value, ...]` lists, refines loggers with names, context values and
//! verbosity, and never deals with the backend directly.
//!
//! # Design
//!
//! An adapter holds a shared sink plus three pieces of accumulated state: a
//! verbosity, a `/`-separated name and a list of key-value pairs. Deriving a
//! logger clones that state and changes one part of it; the sink is shared.
//!
//! Informational records are gated: the verbosity is mapped to a sink level
//! by [`tier`] (below [`DEBUG_THRESHOLD`] → info, below [`TRACE_THRESHOLD`] →
//! debug, otherwise trace) and the record is only built when that level
//! passes the sink's current minimum. Errors are never gated.
//!
//! Each record carries, in order: `verbosity` (informational records) or
//! `error` (error records), `name` when the logger is named, the accumulated
//! pairs, then the call-site pairs.
//!
//! # Invariants
//!
//! - Derivation never mutates the source logger.
//! - Loggers derived from a common root share one sink.
//! - A disabled informational call does no work beyond the level check.
//! - Malformed key-value lists never panic and never return an error; see
//!   [`encode_fields`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logr::{kv, Logger, LoggerAdapter, Options};
//! use logr_sink::{Level, MemorySink, Sink};
//!
//! let memory = Arc::new(MemorySink::with_level(Level::Info));
//! let log = LoggerAdapter::with_options(Options::new().name("sync").sink(memory.clone()));
//!
//! log.info("starting", &kv!["files", 12]);
//! log.v(4).info("scanning", &kv![]); // debug level, filtered out
//!
//! let records = memory.drain();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].message, "starting");
//! ```
//!
//! # See also
//!
//! - [`logr_sink`] for levels, events and the bundled sinks.

mod adapter;
mod kv;
mod logger;
mod macros;
mod verbosity;

pub use adapter::{LoggerAdapter, NAME_FIELD, NAME_SEPARATOR, Options, VERBOSITY_FIELD};
pub use kv::{ARGS_FIELD, DIAGNOSTIC_FIELD, INVALID_KEY_FIELD, KvError, encode_fields, to_value};
pub use logger::Logger;
pub use serde_json::Value;
pub use verbosity::{DEBUG_THRESHOLD, TRACE_THRESHOLD, tier};
