use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{interpolate, EventKind, ItemContext};

/// Severity stored with a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Diagnostic detail
    Debug,
    /// Normal activity (default for content events)
    #[default]
    Info,
    /// Notable but expected activity
    Notice,
    /// Potentially harmful activity
    Warning,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Notice => write!(f, "notice"),
            LogLevel::Warning => write!(f, "warning"),
        }
    }
}

/// A single audit-log entry: message template plus structured context.
///
/// Entries are immutable once built. The message is stored as a template
/// so the host can re-render it later (with links and escaping) through an
/// [`EntryFormatter`](crate::EntryFormatter).
///
/// # Example
///
/// ```
/// use content_audit::{EventKind, ItemContext, ItemId, LogEntry, LogLevel};
///
/// let entry = LogEntry::new(
///     "content",
///     LogLevel::Info,
///     EventKind::Trashed,
///     ItemContext::new(ItemId(12), "page", "Contact"),
/// );
///
/// assert_eq!(entry.message(), r#"Moved {item_type} "{item_title}" to the trash"#);
/// assert_eq!(entry.to_string(), r#"Moved page "Contact" to the trash"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    logger: String,
    level: LogLevel,
    kind: EventKind,
    message: String,
    context: ItemContext,
}

impl LogEntry {
    /// Creates an entry using the kind's standard template.
    pub fn new(
        logger: impl Into<String>,
        level: LogLevel,
        kind: EventKind,
        context: ItemContext,
    ) -> Self {
        Self {
            logger: logger.into(),
            level,
            kind,
            message: kind.template().to_string(),
            context,
        }
    }

    /// Returns the slug of the logger that produced this entry.
    pub fn logger(&self) -> &str {
        &self.logger
    }

    /// Returns the entry's level.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns the event kind.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Returns the stored message template.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the structured context.
    pub fn context(&self) -> &ItemContext {
        &self.context
    }

    /// Serializes the entry as a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses an entry previously produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Plain-text rendering of the stored template, without links.
impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&interpolate(&self.message, self.context.fields()))
    }
}
