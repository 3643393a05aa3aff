use std::sync::{Arc, Mutex};

use refwalk::{DfsWalker, Iter, IterConfig, Walker, walk};
use tracing_subscriber::prelude::*;

/// Collects the message of every event whose level is at least `level`.
struct MessageLog {
    level: tracing::Level,
    messages: Arc<Mutex<Vec<String>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for MessageLog {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if *event.metadata().level() > self.level {
            return;
        }
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.messages.lock().unwrap().push(visitor.0);
    }
}

struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            use std::fmt::Write;
            let _ = write!(self.0, "{:?}", value);
        }
    }
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        }
    }
}

fn capture(level: tracing::Level, f: impl FnOnce()) -> Vec<String> {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(MessageLog {
        level,
        messages: messages.clone(),
    });
    tracing::subscriber::with_default(subscriber, f);

    let messages = messages.lock().unwrap();
    messages.clone()
}

#[test]
fn test_walk_logs_start_and_finish() {
    let messages = capture(tracing::Level::DEBUG, || {
        walk(&vec![1, 2, 3], |_| Ok(())).unwrap();
    });

    assert_eq!(messages.len(), 2, "unexpected events: {:?}", messages);
    assert!(messages[0].starts_with("Walking "));
    assert_eq!(messages[1], "Walk finished after 3 visits");
}

#[test]
fn test_walk_logs_early_stop() {
    let messages = capture(tracing::Level::DEBUG, || {
        let _ = walk(&vec![1, 2, 3], |_| Err(refwalk::WalkError::halt("enough")));
    });

    assert_eq!(messages.last().map(String::as_str), Some("Walk stopped after 1 visits: enough"));
}

#[test]
fn test_walk_traces_each_descent() {
    let messages = capture(tracing::Level::TRACE, || {
        walk(&vec![vec![1], vec![2]], |_| Ok(())).unwrap();
    });

    let descents = messages
        .iter()
        .filter(|message| message.starts_with("Descending into"))
        .count();
    assert_eq!(descents, 4);
}

#[test]
fn test_contained_panic_is_logged() {
    let messages = capture(tracing::Level::WARN, || {
        let walker = DfsWalker::new(Iter::recovering(IterConfig::default()));
        let err = walker
            .walk(&vec![1], &mut |_| panic!("visit exploded"))
            .unwrap_err();
        assert_eq!(err.to_string(), "panic: visit exploded");
    });

    assert_eq!(
        messages,
        vec!["Contained panic during iteration: visit exploded".to_string()]
    );
}
