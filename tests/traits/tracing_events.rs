//! Tests for the events emitted under the `tracing` feature.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use outcome_rail::{err, Outcome, OutcomeOps};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug, Clone)]
struct Recorded {
    level: Level,
    target: String,
    fields: HashMap<String, String>,
}

#[derive(Default)]
struct FieldVisitor(HashMap<String, String>);

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl Recorder {
    fn crate_events(&self) -> Vec<Recorded> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.target == "outcome_rail")
            .cloned()
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        self.events.lock().unwrap().push(Recorded {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            fields: visitor.0,
        });
    }
}

fn record<R>(f: impl FnOnce() -> R) -> Vec<Recorded> {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    tracing::subscriber::with_default(subscriber, f);
    recorder.crate_events()
}

#[test]
fn throw_with_emits_error_event_before_panicking() {
    let events = record(|| crate::panic_message(|| err("x").throw_with("m")));

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::ERROR);
    assert_eq!(event.fields.get("override_message").map(String::as_str), Some("m"));
    assert!(event.fields.get("error_type").is_some_and(|t| t.contains("str")));
}

#[test]
fn throw_without_override_omits_override_message() {
    let events = record(|| crate::panic_message(|| Err::<(), String>("x".to_string()).throw()));

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::ERROR);
    assert!(!events[0].fields.contains_key("override_message"));
}

#[test]
fn and_consume_on_failure_emits_debug_event() {
    let events = record(|| Outcome::<i32, &str>::Failure("e").and_consume(|_| {}));

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::DEBUG);
    assert!(events[0].fields.contains_key("error_type"));
}

#[test]
fn success_emits_no_events() {
    let events = record(|| {
        let mut seen = 0;
        Outcome::<i32, &str>::Success(1).and_consume(|n| seen = n);
        let thrown = Outcome::<i32, &str>::Success(2).throw_with("m");
        seen + thrown
    });

    assert!(events.is_empty());
}
