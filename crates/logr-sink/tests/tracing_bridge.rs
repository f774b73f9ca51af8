//! Integration tests for forwarding records into `tracing`.
//!
//! A capture layer records every event seen by a scoped subscriber so the
//! tests can check level mapping, message text and the rendered fields.

use std::sync::{Arc, Mutex};

use logr_sink::{Event, Level, Sink, TARGET, TracingSink};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Debug, PartialEq)]
struct Captured {
    level: tracing::Level,
    target: String,
    message: Option<String>,
    fields: Option<String>,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

#[derive(Default)]
struct CaptureVisitor {
    message: Option<String>,
    fields: Option<String>,
}

impl tracing::field::Visit for CaptureVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "message" => self.message = Some(format!("{value:?}")),
            "fields" => self.fields = Some(format!("{value:?}")),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_owned()),
            "fields" => self.fields = Some(value.to_owned()),
            _ => {}
        }
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = CaptureVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            target: event.metadata().target().to_owned(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<Captured> {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
}

// ============================================================================
// Forwarding
// ============================================================================

/// Verifies the message and fields of a record reach the subscriber.
#[test]
fn record_is_forwarded_with_fields() {
    let sink = TracingSink::new();
    let events = capture(|| {
        let mut event = Event::new(&sink, Level::Info);
        event.int("verbosity", 0).int("a", 1);
        event.msg("hello");
    });

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, tracing::Level::INFO);
    assert_eq!(events[0].target, TARGET);
    assert_eq!(events[0].message.as_deref(), Some("hello"));
    assert_eq!(events[0].fields.as_deref(), Some(r#"{"verbosity":0,"a":1}"#));
}

/// Verifies each record level lands on the nearest tracing level.
#[test]
fn levels_map_to_tracing_levels() {
    let sink = TracingSink::new();
    let events = capture(|| {
        for level in [
            Level::Trace,
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::Fatal,
            Level::Panic,
            Level::NoLevel,
        ] {
            Event::new(&sink, level).msg(level.as_str());
        }
    });

    let levels: Vec<tracing::Level> = events.iter().map(|e| e.level).collect();
    assert_eq!(
        levels,
        [
            tracing::Level::TRACE,
            tracing::Level::DEBUG,
            tracing::Level::INFO,
            tracing::Level::WARN,
            tracing::Level::ERROR,
            tracing::Level::ERROR,
            tracing::Level::ERROR,
            tracing::Level::INFO,
        ]
    );
}

/// Verifies disabled records are dropped.
#[test]
fn disabled_records_are_not_forwarded() {
    let sink = TracingSink::new();
    let events = capture(|| {
        Event::new(&sink, Level::Disabled).msg("never");
    });
    assert!(events.is_empty());
}

// ============================================================================
// Level gating
// ============================================================================

/// Verifies the sink's own minimum bounds the effective level.
#[test]
fn own_level_bounds_effective_level() {
    let sink = TracingSink::with_level(Level::Error);
    assert!(!sink.enabled(Level::Warn));
    assert_eq!(sink.set_level(Level::Trace), Level::Error);
}
