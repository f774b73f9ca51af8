//! crates/logr/src/adapter.rs
//! [`Logger`] implementation translating calls into sink events.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use logr_sink::{Event, JsonSink, Level, Sink, SinkConfig, SinkInitError};
use serde_json::Value;

use super::kv::encode_fields;
use super::logger::Logger;
use super::verbosity::tier;

/// Field carrying the logger verbosity on informational records.
pub const VERBOSITY_FIELD: &str = "verbosity";
/// Field carrying the logger name when it is not empty.
pub const NAME_FIELD: &str = "name";
/// Separator between name segments.
pub const NAME_SEPARATOR: char = '/';

/// Construction options for [`LoggerAdapter`].
#[derive(Clone, Default)]
pub struct Options {
    /// Initial logger name.
    pub name: Option<String>,
    /// Sink to write to. When `None`, a [`JsonSink`] on standard error with
    /// timestamps is created.
    pub sink: Option<Arc<dyn Sink>>,
}

impl Options {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the sink.
    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("name", &self.name)
            .field("sink", &self.sink.as_ref().map(|_| "<sink>"))
            .finish()
    }
}

/// Logger writing to a shared [`Sink`].
///
/// The adapter carries a verbosity, a `/`-separated name and a list of
/// accumulated key-value pairs. Informational records are written at the
/// level [`tier`] assigns to the verbosity, and only when that level passes
/// the sink's current minimum; errors are always written at
/// [`Level::Error`].
///
/// Every derived logger shares the sink of the logger it came from and owns
/// its own copy of the accumulated pairs, so loggers derived from a common
/// parent never see each other's values.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logr::{kv, Logger, LoggerAdapter, Options};
/// use logr_sink::MemorySink;
///
/// let memory = Arc::new(MemorySink::new());
/// let root = LoggerAdapter::with_options(Options::new().sink(memory.clone()));
///
/// let log = root.with_name("controller").with_values(&kv!["request", 7]);
/// log.info("reconciled", &kv!["changed", true]);
///
/// let record = &memory.drain()[0];
/// assert_eq!(record.field("name"), Some(&serde_json::json!("controller")));
/// assert_eq!(record.field("request"), Some(&serde_json::json!(7)));
/// assert_eq!(record.field("changed"), Some(&serde_json::json!(true)));
/// ```
#[derive(Clone)]
pub struct LoggerAdapter {
    sink: Arc<dyn Sink>,
    verbosity: u32,
    name: String,
    values: Vec<Value>,
}

impl LoggerAdapter {
    /// Creates a root logger on the default standard error sink.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Creates a root logger from `options`.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        let sink = options
            .sink
            .unwrap_or_else(|| Arc::new(JsonSink::stderr()));
        Self {
            sink,
            verbosity: 0,
            name: options.name.unwrap_or_default(),
            values: Vec::new(),
        }
    }

    /// Creates a root logger on a sink built from `config`.
    pub fn from_config(name: Option<String>, config: &SinkConfig) -> Result<Self, SinkInitError> {
        let sink = config.build()?;
        Ok(Self::with_options(Options { name, sink: Some(sink) }))
    }

    /// Creates a root logger forwarding records to the installed `tracing`
    /// subscriber.
    #[cfg(feature = "tracing")]
    #[must_use]
    pub fn tracing(name: Option<String>) -> Self {
        let sink: Arc<dyn Sink> = Arc::new(logr_sink::TracingSink::new());
        Self::with_options(Options { name, sink: Some(sink) })
    }

    /// Returns the shared sink.
    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    /// Returns the verbosity.
    pub const fn verbosity(&self) -> u32 {
        self.verbosity
    }

    /// Returns the joined name, empty for an unnamed logger.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the accumulated key-value pairs.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns the level informational records are written at.
    pub const fn level(&self) -> Level {
        tier(self.verbosity)
    }

    fn attach_context(&self, event: &mut Event<'_>, kv: &[Value]) {
        if !self.name.is_empty() {
            event.str(NAME_FIELD, &self.name);
        }
        encode_fields(event, &self.values);
        encode_fields(event, kv);
    }
}

impl Default for LoggerAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for LoggerAdapter {
    fn enabled(&self) -> bool {
        self.sink.enabled(self.level())
    }

    fn info(&self, msg: &str, kv: &[Value]) {
        if !self.enabled() {
            return;
        }
        let mut event = Event::new(&*self.sink, self.level());
        event.uint(VERBOSITY_FIELD, u64::from(self.verbosity));
        self.attach_context(&mut event, kv);
        event.msg(msg);
    }

    fn error(&self, err: &(dyn Error + 'static), msg: &str, kv: &[Value]) {
        let mut event = Event::new(&*self.sink, Level::Error);
        event.err(err);
        self.attach_context(&mut event, kv);
        event.msg(msg);
    }

    fn with_verbosity(&self, verbosity: u32) -> Self {
        let mut derived = self.clone();
        derived.verbosity = verbosity;
        derived
    }

    fn with_name(&self, name: &str) -> Self {
        let mut derived = self.clone();
        if !derived.name.is_empty() {
            derived.name.push(NAME_SEPARATOR);
        }
        derived.name.push_str(name);
        derived
    }

    fn with_values(&self, kv: &[Value]) -> Self {
        let mut derived = self.clone();
        derived.values.extend_from_slice(kv);
        derived
    }
}

impl fmt::Debug for LoggerAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerAdapter")
            .field("verbosity", &self.verbosity)
            .field("name", &self.name)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}
