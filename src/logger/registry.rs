//! Composition of loggers and a sink.

use tracing::{debug, warn};

use super::{EventClassifier, HostEvent};
use crate::{render, LogEntry, LogSink, RegistryError};

/// Routes host events through every registered logger into one sink.
///
/// The registry belongs to the host adapter. Loggers are consulted in
/// registration order; each may produce at most one entry per event. Sink
/// failures are reported through `tracing` and otherwise swallowed, so a
/// logging problem never fails the host operation being observed.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use content_audit::{ContentLogger, HostEvent, InMemoryItems, ItemId, ItemSnapshot,
///     LoggerRegistry, MemorySink};
///
/// let items = Rc::new(InMemoryItems::new());
/// items.insert(ItemSnapshot::new(ItemId(1), "post", "Hello", "publish"));
///
/// let sink = Rc::new(MemorySink::new());
/// let mut registry = LoggerRegistry::new(Rc::clone(&sink));
/// registry.register(ContentLogger::new(Rc::clone(&items))).unwrap();
///
/// assert_eq!(registry.dispatch(&HostEvent::deleted(ItemId(1))), 1);
/// assert_eq!(sink.entries()[0].to_string(), r#"Deleted post "Hello""#);
/// ```
pub struct LoggerRegistry<'a> {
    classifiers: Vec<Box<dyn EventClassifier + 'a>>,
    sink: Box<dyn LogSink + 'a>,
}

impl<'a> LoggerRegistry<'a> {
    /// Creates an empty registry writing to `sink`.
    pub fn new(sink: impl LogSink + 'a) -> Self {
        Self {
            classifiers: Vec::new(),
            sink: Box::new(sink),
        }
    }

    /// Adds a logger.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` if the slug is empty or already taken.
    pub fn register(&mut self, classifier: impl EventClassifier + 'a) -> Result<(), RegistryError> {
        let slug = classifier.slug();
        if slug.is_empty() {
            return Err(RegistryError::EmptySlug);
        }
        if self.get(slug).is_some() {
            return Err(RegistryError::DuplicateSlug {
                slug: slug.to_string(),
            });
        }
        debug!(logger = %slug, "registered logger");
        self.classifiers.push(Box::new(classifier));
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` if the slug is empty or already taken.
    pub fn with(mut self, classifier: impl EventClassifier + 'a) -> Result<Self, RegistryError> {
        self.register(classifier)?;
        Ok(self)
    }

    /// Returns the logger registered under `slug`.
    pub fn get(&self, slug: &str) -> Option<&(dyn EventClassifier + 'a)> {
        self.classifiers
            .iter()
            .find(|c| c.slug() == slug)
            .map(|c| &**c)
    }

    /// Returns the registered slugs in registration order.
    pub fn slugs(&self) -> Vec<&str> {
        self.classifiers.iter().map(|c| c.slug()).collect()
    }

    /// Returns the number of registered loggers.
    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    /// Returns `true` if no loggers are registered.
    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }

    /// Offers `event` to every logger and records the resulting entries.
    ///
    /// Returns the number of entries the sink accepted.
    pub fn dispatch(&self, event: &HostEvent) -> usize {
        let mut recorded = 0;
        for classifier in &self.classifiers {
            let Some(entry) = classifier.classify_event(event) else {
                continue;
            };
            let kind = entry.kind();
            match self.sink.record(entry) {
                Ok(()) => recorded += 1,
                Err(err) => warn!(
                    logger = %classifier.slug(),
                    kind = %kind,
                    event = %event,
                    error = %err,
                    "failed to record log entry"
                ),
            }
        }
        recorded
    }

    /// Renders a stored entry through the logger that produced it.
    ///
    /// Entries from loggers that are no longer registered fall back to the
    /// stored template with HTML-escaped context.
    pub fn render(&self, entry: &LogEntry) -> String {
        match self.get(entry.logger()) {
            Some(classifier) => classifier.render_entry(entry),
            None => render(entry.message(), entry.context().fields()),
        }
    }
}

impl std::fmt::Debug for LoggerRegistry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("loggers", &self.slugs())
            .finish_non_exhaustive()
    }
}
