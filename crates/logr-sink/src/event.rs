//! crates/logr-sink/src/event.rs
//! Event builder and the finalized record handed to sinks.

use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;

use serde_json::Value;

use super::level::Level;
use super::sink::Sink;

/// Field name used by [`Event::err`].
pub const ERROR_FIELD: &str = "error";
/// Field name used by [`Event::stack`].
pub const STACK_FIELD: &str = "stack";

/// A single key/value pair attached to a record.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    /// Field name. Duplicates are allowed; later fields shadow earlier ones
    /// only in consumers that collapse them.
    pub key: String,
    /// Field value.
    pub value: Value,
}

/// A finalized event, as delivered to [`Sink::write`].
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Severity of the record.
    pub level: Level,
    /// Fields in insertion order.
    pub fields: Vec<Field>,
    /// Message supplied when the event was finalized.
    pub message: String,
}

impl Record {
    /// Returns the first field named `key`.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.value)
    }

    /// Returns the last field named `key`, matching shadowing semantics.
    #[must_use]
    pub fn last_field(&self, key: &str) -> Option<&Value> {
        self.fields.iter().rev().find(|f| f.key == key).map(|f| &f.value)
    }

    /// Returns every value stored under `key`, in insertion order.
    pub fn fields_named<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.fields.iter().filter(move |f| f.key == key).map(|f| &f.value)
    }

    /// Returns `true` when at least one field is named `key`.
    #[must_use]
    pub fn has_field(&self, key: &str) -> bool {
        self.fields.iter().any(|f| f.key == key)
    }
}

/// Builder collecting fields for one record.
///
/// The builder borrows the sink that created it; [`msg`](Self::msg) hands the
/// finished [`Record`] back to that sink. Attach methods take `&mut self` so
/// calls chain the way the fields should appear in the output.
///
/// ```
/// use logr_sink::{Event, Level, MemorySink};
///
/// let sink = MemorySink::new();
/// let mut event = Event::new(&sink, Level::Info);
/// event.int("attempt", 3).str("peer", "10.0.0.1");
/// event.msg("connected");
///
/// let records = sink.drain();
/// assert_eq!(records[0].message, "connected");
/// assert_eq!(records[0].field("attempt"), Some(&serde_json::json!(3)));
/// ```
#[must_use = "an event is only written once `msg` is called"]
pub struct Event<'a> {
    sink: &'a dyn Sink,
    level: Level,
    fields: Vec<Field>,
}

impl<'a> Event<'a> {
    /// Starts an event at `level` that will be written to `sink`.
    pub fn new(sink: &'a dyn Sink, level: Level) -> Self {
        Self {
            sink,
            level,
            fields: Vec::new(),
        }
    }

    /// Returns the level the event was created with.
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Returns the fields attached so far.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn push(&mut self, key: &str, value: Value) -> &mut Self {
        self.fields.push(Field {
            key: key.to_owned(),
            value,
        });
        self
    }

    /// Attaches a signed integer field.
    pub fn int(&mut self, key: &str, value: i64) -> &mut Self {
        self.push(key, Value::from(value))
    }

    /// Attaches an unsigned integer field.
    pub fn uint(&mut self, key: &str, value: u64) -> &mut Self {
        self.push(key, Value::from(value))
    }

    /// Attaches a string field.
    pub fn str(&mut self, key: &str, value: &str) -> &mut Self {
        self.push(key, Value::from(value))
    }

    /// Attaches `err` under the `error` field.
    pub fn err(&mut self, err: &(dyn Error + 'static)) -> &mut Self {
        self.an_err(ERROR_FIELD, err)
    }

    /// Attaches `err` under `key`, rendered with its `Display` text.
    pub fn an_err(&mut self, key: &str, err: &(dyn Error + 'static)) -> &mut Self {
        self.push(key, Value::String(err.to_string()))
    }

    /// Attaches an arbitrary value as-is.
    pub fn value(&mut self, key: &str, value: Value) -> &mut Self {
        self.push(key, value)
    }

    /// Captures the current call stack under the `stack` field.
    pub fn stack(&mut self) -> &mut Self {
        let trace = Backtrace::force_capture().to_string();
        self.push(STACK_FIELD, Value::String(trace))
    }

    /// Finalizes the event with `message` and writes it to the sink.
    pub fn msg(self, message: &str) {
        let record = Record {
            level: self.level,
            fields: self.fields,
            message: message.to_owned(),
        };
        self.sink.write(&record);
    }

    /// Discards the event without writing anything.
    pub fn discard(self) {}
}

impl fmt::Debug for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("level", &self.level)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
