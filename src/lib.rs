//! Audit-log classification of content lifecycle events.
//!
//! This crate turns lifecycle changes of content items (posts, pages and
//! custom content types) into human-readable activity-log entries:
//! - **Classification**: a pure, total decision of which event a status
//!   change represents (created, updated, trashed, or nothing at all)
//! - **Entries**: message templates plus typed context, ready for storage
//! - **Rendering**: placeholder substitution with escaping of every
//!   host-supplied value, and edit links resolved at display time
//!
//! The host owns event dispatch, content lookup and log storage. It plugs
//! in through explicit traits ([`ItemLookup`], [`EditLinkResolver`],
//! [`LogSink`]) and forwards its events to a [`LoggerRegistry`].
//!
//! # Core Types
//!
//! - [`classify`], [`classify_delete`], [`classify_restore`]: the rules
//! - [`LifecycleStatus`]: open status vocabulary; unknown values are kept
//! - [`ContentLogger`]: the [`EventClassifier`] for content items
//! - [`LogEntry`]: an immutable, serializable log entry
//! - [`EntryFormatter`]: renders stored entries with links
//!
//! # Examples
//!
//! ```
//! use content_audit::{classify, Classification, EventKind, LifecycleStatus};
//!
//! let outcome = classify(&LifecycleStatus::AutoDraft, &LifecycleStatus::Draft, false);
//! assert_eq!(outcome, Classification::Emit(EventKind::Created));
//!
//! // Revisions are never logged
//! let outcome = classify(&LifecycleStatus::Draft, &LifecycleStatus::Publish, true);
//! assert!(outcome.is_ignored());
//! ```
//!
//! Wiring a host:
//!
//! ```
//! use content_audit::{ContentLogger, HostEvent, InMemoryItems, ItemId, ItemSnapshot,
//!     LoggerRegistry, MemorySink};
//!
//! let items = InMemoryItems::with_edit_links("/post.php?post={item_id}&action=edit");
//! let sink = MemorySink::new();
//! let registry = LoggerRegistry::new(&sink)
//!     .with(ContentLogger::new(&items).with_links(&items))
//!     .expect("unique slug");
//!
//! let item = ItemSnapshot::new(ItemId(10), "page", "About", "publish");
//! items.insert(item.clone());
//! registry.dispatch(&HostEvent::transition("pending", "publish", item));
//!
//! let entry = &sink.entries()[0];
//! assert_eq!(
//!     registry.render(entry),
//!     r#"Updated page <a href="/post.php?post=10&amp;action=edit">"About"</a>"#,
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod config;
mod entry;
mod error;
mod escape;
mod formatter;
mod item;
pub mod logger;
mod sink;
mod status;
mod template;

#[cfg(test)]
mod test_utils;

pub use classify::{
    classify, classify_delete, classify_restore, Classification, EventKind, IgnoreReason,
    Transition,
};
pub use config::ContentLoggerConfig;
pub use entry::{LogEntry, LogLevel};
pub use error::RegistryError;
pub use escape::{Escaper, HtmlEscaper, PlainText, Tainted, Verified};
pub use formatter::{EntryFormatter, NoLinks, EDIT_LINK};
pub use item::{EditLinkResolver, InMemoryItems, ItemContext, ItemId, ItemLookup, ItemSnapshot};
pub use logger::{ContentLogger, EventClassifier, HostEvent, LoggerRegistry};
pub use sink::{JsonLinesSink, LogSink, MemorySink, SinkError, TracingSink};
pub use status::LifecycleStatus;
pub use template::{interpolate, placeholders, render, render_with};
