//! crates/logr-sink/src/json.rs
//! Sink rendering each record as one JSON object per line.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::event::Record;
use super::global::LevelCell;
use super::level::Level;
use super::sink::Sink;

/// Field carrying the record level.
pub const LEVEL_FIELD: &str = "level";
/// Field carrying the timestamp when enabled.
pub const TIME_FIELD: &str = "time";
/// Field carrying the record message.
pub const MESSAGE_FIELD: &str = "message";

enum Threshold {
    Global,
    Own(LevelCell),
}

impl Threshold {
    fn cell(&self) -> &LevelCell {
        match self {
            Self::Global => LevelCell::global(),
            Self::Own(cell) => cell,
        }
    }
}

/// Streaming sink writing newline-delimited JSON into an [`io::Write`] target.
///
/// Each record becomes a single line of the form
/// `{"level":"info","verbosity":0,"a":1,"time":"…","message":"hello"}`:
/// the level first, then the record fields in insertion order (duplicate keys
/// are written twice), then the optional timestamp and the message. An empty
/// message is omitted, as is the level of a [`Level::NoLevel`] record.
///
/// The writer sits behind a mutex so concurrent records never interleave
/// within a line. By default the sink is gated by the process-wide minimum
/// level; [`with_own_level`](Self::with_own_level) detaches it.
///
/// # Examples
///
/// ```
/// use logr_sink::{Event, JsonSink, Level};
///
/// let sink = JsonSink::new(Vec::new()).with_own_level(Level::Trace);
/// let mut event = Event::new(&sink, Level::Info);
/// event.int("a", 1);
/// event.msg("hello");
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "{\"level\":\"info\",\"a\":1,\"message\":\"hello\"}\n");
/// ```
pub struct JsonSink<W> {
    writer: Mutex<W>,
    timestamp: bool,
    threshold: Threshold,
}

impl JsonSink<io::Stderr> {
    /// Creates the default sink: standard error, timestamps on, gated by the
    /// process-wide minimum level.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr()).with_timestamp(true)
    }
}

impl<W> JsonSink<W> {
    /// Creates a sink without timestamps, gated by the process-wide minimum.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            timestamp: false,
            threshold: Threshold::Global,
        }
    }

    /// Enables or disables the `time` field.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Gives the sink its own minimum level instead of the process-wide one.
    #[must_use]
    pub fn with_own_level(mut self, level: Level) -> Self {
        self.threshold = Threshold::Own(LevelCell::new(level));
        self
    }

    /// Returns `true` when a `time` field is attached to every record.
    pub const fn timestamp(&self) -> bool {
        self.timestamp
    }

    /// Consumes the sink and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Renders `record` as one JSON line, including the trailing newline.
    pub fn render(&self, record: &Record) -> String {
        let mut line = String::with_capacity(64 + record.message.len());
        let mut first = true;
        line.push('{');

        if record.level != Level::NoLevel {
            push_field(&mut line, &mut first, LEVEL_FIELD, &Value::from(record.level.as_str()));
        }
        for field in &record.fields {
            push_field(&mut line, &mut first, &field.key, &field.value);
        }
        if self.timestamp {
            if let Ok(now) = OffsetDateTime::now_utc().format(&Rfc3339) {
                push_field(&mut line, &mut first, TIME_FIELD, &Value::String(now));
            }
        }
        if !record.message.is_empty() {
            push_field(&mut line, &mut first, MESSAGE_FIELD, &Value::from(record.message.as_str()));
        }

        line.push_str("}\n");
        line
    }
}

fn push_field(line: &mut String, first: &mut bool, key: &str, value: &Value) {
    if !*first {
        line.push(',');
    }
    *first = false;
    // `Value`'s Display impl writes compact JSON, escaping included.
    line.push_str(&Value::from(key).to_string());
    line.push(':');
    line.push_str(&value.to_string());
}

impl<W> Sink for JsonSink<W>
where
    W: Write + Send,
{
    fn write(&self, record: &Record) {
        let line = self.render(record);
        let mut writer = self.lock();
        if let Err(err) = writer.write_all(line.as_bytes()) {
            let _ = writeln!(io::stderr().lock(), "zerolog: could not write event: {err}");
        }
    }

    fn level(&self) -> Level {
        self.threshold.cell().get()
    }

    fn set_level(&self, level: Level) -> Level {
        self.threshold.cell().set(level)
    }
}

impl<W> fmt::Debug for JsonSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let own = matches!(self.threshold, Threshold::Own(_));
        f.debug_struct("JsonSink")
            .field("writer", &self.writer)
            .field("timestamp", &self.timestamp)
            .field("own_level", &own)
            .field("level", self.threshold.cell())
            .finish()
    }
}
