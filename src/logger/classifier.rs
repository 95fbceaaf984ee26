//! The per-feature logger interface.

use super::HostEvent;
use crate::{render, LogEntry};

/// A logger for one feature area (content, users, plugins, ...).
///
/// Implementations inspect the events they understand, ignore the rest,
/// and turn relevant ones into [`LogEntry`] values. They never write to a
/// sink themselves; the [`LoggerRegistry`](super::LoggerRegistry) does.
///
/// # Example
///
/// ```
/// use content_audit::{EventClassifier, HostEvent, LogEntry};
///
/// /// A logger that only cares about events it does not receive.
/// struct Quiet;
///
/// impl EventClassifier for Quiet {
///     fn slug(&self) -> &str {
///         "quiet"
///     }
///
///     fn classify_event(&self, _event: &HostEvent) -> Option<LogEntry> {
///         None
///     }
/// }
///
/// assert!(Quiet.classify_event(&HostEvent::deleted(1u64)).is_none());
/// ```
pub trait EventClassifier {
    /// Unique slug stored with every entry this logger produces.
    fn slug(&self) -> &str;

    /// Turns a host event into an entry, or `None` if it is not logged.
    fn classify_event(&self, event: &HostEvent) -> Option<LogEntry>;

    /// Renders an entry this logger produced for display.
    ///
    /// The default renders the stored template with HTML-escaped context.
    fn render_entry(&self, entry: &LogEntry) -> String {
        render(entry.message(), entry.context().fields())
    }
}

impl<T: EventClassifier + ?Sized> EventClassifier for Box<T> {
    fn slug(&self) -> &str {
        (**self).slug()
    }

    fn classify_event(&self, event: &HostEvent) -> Option<LogEntry> {
        (**self).classify_event(event)
    }

    fn render_entry(&self, entry: &LogEntry) -> String {
        (**self).render_entry(entry)
    }
}
