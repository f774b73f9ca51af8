//! crates/logr-sink/src/tracing_bridge.rs
//! Sink forwarding records into the `tracing` ecosystem.
//!
//! [`TracingSink`] lets applications that already install a `tracing`
//! subscriber route adapter output through it instead of writing JSON lines
//! directly. Every record becomes one `tracing` event with target
//! [`TARGET`]:
//!
//! - the record level maps onto the nearest `tracing` level
//!   (fatal and panic collapse into `ERROR`, records without a level are
//!   emitted at `INFO`);
//! - the record fields are rendered as a JSON object and recorded under the
//!   `fields` key, preserving order and duplicates;
//! - the record message becomes the event message.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logr_sink::TracingSink;
//!
//! tracing_subscriber::fmt().init();
//! let sink = Arc::new(TracingSink::new());
//! ```

use std::fmt::Write as _;

use serde_json::Value;
use tracing::level_filters::LevelFilter;

use super::event::Record;
use super::global::LevelCell;
use super::level::Level;
use super::sink::Sink;

/// Target attached to every forwarded event.
pub const TARGET: &str = "zerologr";

/// Sink that re-emits records as `tracing` events.
///
/// The effective minimum level is the stricter of the sink's own cell and
/// the maximum level the installed `tracing` subscribers accept, so records
/// no subscriber would keep are gated before any field is encoded.
#[derive(Debug, Default)]
pub struct TracingSink {
    level: LevelCell,
}

impl TracingSink {
    /// Creates a sink accepting every level the subscribers accept.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink with its own minimum level.
    #[must_use]
    pub fn with_level(level: Level) -> Self {
        Self {
            level: LevelCell::new(level),
        }
    }

    /// Map the subscribers' maximum verbosity to a minimum record level.
    fn from_filter(filter: LevelFilter) -> Level {
        if filter == LevelFilter::OFF {
            Level::Disabled
        } else if filter == LevelFilter::ERROR {
            Level::Error
        } else if filter == LevelFilter::WARN {
            Level::Warn
        } else if filter == LevelFilter::INFO {
            Level::Info
        } else if filter == LevelFilter::DEBUG {
            Level::Debug
        } else {
            Level::Trace
        }
    }

    /// Render the record fields as a JSON object, keeping duplicates.
    fn render_fields(record: &Record) -> String {
        let mut out = String::from("{");
        for (index, field) in record.fields.iter().enumerate() {
            if index > 0 {
                out.push(',');
            }
            let _ = write!(out, "{}:{}", Value::from(field.key.as_str()), field.value);
        }
        out.push('}');
        out
    }
}

impl Sink for TracingSink {
    fn write(&self, record: &Record) {
        let fields = Self::render_fields(record);
        let message = record.message.as_str();

        match record.level {
            Level::Trace => {
                tracing::trace!(target: TARGET, fields = %fields, "{}", message);
            }
            Level::Debug => {
                tracing::debug!(target: TARGET, fields = %fields, "{}", message);
            }
            Level::Info | Level::NoLevel => {
                tracing::info!(target: TARGET, fields = %fields, "{}", message);
            }
            Level::Warn => {
                tracing::warn!(target: TARGET, fields = %fields, "{}", message);
            }
            Level::Error | Level::Fatal | Level::Panic => {
                tracing::error!(target: TARGET, fields = %fields, "{}", message);
            }
            Level::Disabled => {}
        }
    }

    fn level(&self) -> Level {
        self.level.get().max(Self::from_filter(LevelFilter::current()))
    }

    fn set_level(&self, level: Level) -> Level {
        self.level.set(level)
    }
}
