use std::cell::RefCell;
use std::io::Write;

use thiserror::Error;

use crate::{LogEntry, LogLevel};

/// Error returned when a sink fails to record an entry.
///
/// Sink errors never reach the host operation being observed: the
/// [`LoggerRegistry`](crate::LoggerRegistry) reports them through `tracing`
/// and moves on.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The entry could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The sink has reached its capacity.
    #[error("sink full (capacity {capacity})")]
    Full {
        /// Maximum number of entries the sink accepts
        capacity: usize,
    },
}

/// Destination for finished log entries.
///
/// Storage is owned by the host; implementations adapt an entry to
/// whatever the host persists.
pub trait LogSink {
    /// Records one entry.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the entry could not be recorded.
    fn record(&self, entry: LogEntry) -> Result<(), SinkError>;
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn record(&self, entry: LogEntry) -> Result<(), SinkError> {
        (**self).record(entry)
    }
}

impl<T: LogSink + ?Sized> LogSink for std::rc::Rc<T> {
    fn record(&self, entry: LogEntry) -> Result<(), SinkError> {
        (**self).record(entry)
    }
}

/// Collects entries in memory, optionally up to a fixed capacity.
///
/// # Examples
///
/// ```
/// use content_audit::{EventKind, ItemContext, ItemId, LogEntry, LogLevel, LogSink, MemorySink};
///
/// let sink = MemorySink::new();
/// let entry = LogEntry::new("content", LogLevel::Info, EventKind::Created,
///     ItemContext::new(ItemId(1), "post", "Hello"));
///
/// sink.record(entry).unwrap();
/// assert_eq!(sink.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: RefCell<Vec<LogEntry>>,
    capacity: Option<usize>,
}

impl MemorySink {
    /// Creates an unbounded sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that rejects entries beyond `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RefCell::new(Vec::with_capacity(capacity)),
            capacity: Some(capacity),
        }
    }

    /// Returns the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Provides borrowed access to the entries via callback.
    pub fn with_entries<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[LogEntry]) -> R,
    {
        f(&self.entries.borrow())
    }

    /// Returns a snapshot of the recorded entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    /// Consumes the sink and returns the recorded entries.
    pub fn into_vec(self) -> Vec<LogEntry> {
        self.entries.into_inner()
    }

    /// Removes all recorded entries.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl LogSink for MemorySink {
    fn record(&self, entry: LogEntry) -> Result<(), SinkError> {
        let mut entries = self.entries.borrow_mut();
        if let Some(capacity) = self.capacity {
            if entries.len() >= capacity {
                return Err(SinkError::Full { capacity });
            }
        }
        entries.push(entry);
        Ok(())
    }
}

/// Emits each entry as a structured `tracing` event.
///
/// Events use target `content_audit`; the entry's level maps onto the
/// closest tracing level (`notice` becomes `INFO`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&self, entry: LogEntry) -> Result<(), SinkError> {
        let message = entry.to_string();
        let ctx = entry.context();
        macro_rules! emit {
            ($level:ident) => {
                tracing::$level!(
                    target: "content_audit",
                    logger = %entry.logger(),
                    kind = %entry.kind(),
                    item_id = %ctx.item_id,
                    item_type = %ctx.item_type,
                    "{}",
                    message
                )
            };
        }
        match entry.level() {
            LogLevel::Debug => emit!(debug),
            LogLevel::Info | LogLevel::Notice => emit!(info),
            LogLevel::Warning => emit!(warn),
        }
        Ok(())
    }
}

/// Writes one JSON object per entry, newline-delimited.
///
/// # Examples
///
/// ```
/// use content_audit::{EventKind, ItemContext, ItemId, JsonLinesSink, LogEntry, LogLevel, LogSink};
///
/// let sink = JsonLinesSink::new(Vec::new());
/// let entry = LogEntry::new("content", LogLevel::Info, EventKind::Deleted,
///     ItemContext::new(ItemId(2), "page", "Old"));
/// sink.record(entry).unwrap();
///
/// let out = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(out.ends_with('\n'));
/// assert!(out.contains(r#""kind":"deleted""#));
/// ```
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: RefCell<W>,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write> LogSink for JsonLinesSink<W> {
    fn record(&self, entry: LogEntry) -> Result<(), SinkError> {
        let line = entry.to_json()?;
        let mut writer = self.writer.borrow_mut();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
