//! Checks the structured log output emitted through `tracing`.

use std::io;
use std::sync::{Arc, Mutex};

use content_audit::{
    ContentLogger, EventKind, HostEvent, InMemoryItems, ItemContext, ItemId, ItemSnapshot,
    LogEntry, LogLevel, LogSink, LoggerRegistry, MemorySink, TracingSink,
};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Capture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    fn contents(&self) -> String {
        let guard = self.buf.lock().expect("mutex poisoned");
        String::from_utf8_lossy(&guard).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.buf.lock().map_err(|_| io::ErrorKind::Other)?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let out = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(out.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    out.contents()
}

#[test]
fn tracing_sink_emits_message_and_fields() {
    let output = capture(|| {
        let entry = LogEntry::new(
            "content",
            LogLevel::Info,
            EventKind::Trashed,
            ItemContext::new(ItemId(12), "page", "Contact"),
        );
        TracingSink.record(entry).expect("tracing sink never fails");
    });

    assert!(output.contains(r#"Moved page "Contact" to the trash"#));
    assert!(output.contains("content_audit"));
    assert!(output.contains("kind=trashed"));
    assert!(output.contains("item_id=12"));
    assert!(output.contains("INFO"));
}

#[test]
fn classification_decisions_are_debug_logged() {
    let output = capture(|| {
        let items = InMemoryItems::new();
        let logger = ContentLogger::new(&items);
        let item = ItemSnapshot::new(ItemId(3), "post", "Hello", "auto-draft");
        let _ = logger.on_status_transition(&"new".into(), &"auto-draft".into(), &item);
    });

    assert!(output.contains("classified status transition"));
    assert!(output.contains("ignored (placeholder)"));
}

#[test]
fn sink_failures_are_warned() {
    let output = capture(|| {
        let items = InMemoryItems::new();
        items.insert(ItemSnapshot::new(ItemId(1), "post", "Hello", "publish"));

        let sink = MemorySink::with_capacity(0);
        let registry = LoggerRegistry::new(&sink)
            .with(ContentLogger::new(&items))
            .expect("unique slug");

        assert_eq!(registry.dispatch(&HostEvent::deleted(ItemId(1))), 0);
    });

    assert!(output.contains("WARN"));
    assert!(output.contains("failed to record log entry"));
    assert!(output.contains("sink full (capacity 0)"));
}
