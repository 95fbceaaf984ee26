//! Logger for posts, pages and custom content types.

use tracing::debug;

use super::{EventClassifier, HostEvent};
use crate::{
    classify, classify_delete, classify_restore, Classification, ContentLoggerConfig,
    EditLinkResolver, EntryFormatter, IgnoreReason, ItemContext, ItemId, ItemLookup,
    ItemSnapshot, LifecycleStatus, LogEntry, NoLinks,
};

/// Turns content lifecycle events into audit-log entries.
///
/// `ContentLogger` exposes one explicit entry point per host event, so a
/// host adapter can wire them to whatever event mechanism it has:
///
/// - [`on_status_transition`](Self::on_status_transition) for status changes
/// - [`on_delete`](Self::on_delete) for permanent deletion
/// - [`on_restore`](Self::on_restore) for restores from the trash
///
/// Classification itself is delegated to the pure functions in
/// [`classify`](crate::classify); this type adds item lookup, type
/// exclusion and entry construction. Failed lookups never raise: deleting
/// or restoring an unknown item is logged with empty type and title.
///
/// # Example
///
/// ```
/// use content_audit::{ContentLogger, InMemoryItems, ItemId, ItemSnapshot};
///
/// let items = InMemoryItems::new();
/// let logger = ContentLogger::new(&items);
///
/// let item = ItemSnapshot::new(ItemId(1), "post", "Hello", "draft");
/// let entry = logger
///     .on_status_transition(&"auto-draft".into(), &"draft".into(), &item)
///     .expect("creation is logged");
///
/// assert_eq!(entry.to_string(), r#"Created post "Hello""#);
/// ```
#[derive(Debug)]
pub struct ContentLogger<L, R = NoLinks> {
    config: ContentLoggerConfig,
    lookup: L,
    formatter: EntryFormatter<R>,
}

impl<L: ItemLookup> ContentLogger<L> {
    /// Creates a logger with the default configuration and no edit links.
    pub fn new(lookup: L) -> Self {
        Self::with_config(lookup, ContentLoggerConfig::default())
    }

    /// Creates a logger with an explicit configuration and no edit links.
    pub fn with_config(lookup: L, config: ContentLoggerConfig) -> Self {
        Self {
            config,
            lookup,
            formatter: EntryFormatter::without_links(),
        }
    }
}

impl<L: ItemLookup, R: EditLinkResolver> ContentLogger<L, R> {
    /// Replaces the edit-link resolver used when rendering entries.
    pub fn with_links<R2: EditLinkResolver>(self, resolver: R2) -> ContentLogger<L, R2> {
        ContentLogger {
            config: self.config,
            lookup: self.lookup,
            formatter: EntryFormatter::new(resolver),
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ContentLoggerConfig {
        &self.config
    }

    /// Returns the entry formatter.
    pub fn formatter(&self) -> &EntryFormatter<R> {
        &self.formatter
    }

    /// Handles a status change of `item` from `previous` to `new`.
    ///
    /// The item's revision flag feeds the classifier; its type and title
    /// are passed through into the entry's context.
    pub fn on_status_transition(
        &self,
        previous: &LifecycleStatus,
        new: &LifecycleStatus,
        item: &ItemSnapshot,
    ) -> Option<LogEntry> {
        let classification = self.exclude(
            classify(previous, new, item.is_revision),
            &item.item_type,
        );
        debug!(
            logger = %self.config.slug,
            item_id = %item.id,
            previous = %previous,
            new = %new,
            outcome = %classification,
            "classified status transition"
        );
        self.entry(classification, item.context())
    }

    /// Handles the permanent deletion of `id`.
    ///
    /// The item's current status decides whether the deletion is logged.
    /// An item the lookup cannot resolve has no status to rule it out, so
    /// its deletion is logged with empty type and title.
    pub fn on_delete(&self, id: ItemId) -> Option<LogEntry> {
        let (classification, context) = match self.lookup.resolve(id) {
            Some(item) => (
                self.exclude(classify_delete(&item.status, item.is_revision), &item.item_type),
                item.context(),
            ),
            None => (
                classify_delete(&LifecycleStatus::from(""), false),
                ItemContext::unresolved(id),
            ),
        };
        debug!(
            logger = %self.config.slug,
            item_id = %id,
            outcome = %classification,
            "classified deletion"
        );
        self.entry(classification, context)
    }

    /// Handles a restore of `id` from the trash.
    ///
    /// Restores are always logged unless the item type is excluded.
    pub fn on_restore(&self, id: ItemId) -> Option<LogEntry> {
        let (classification, context) = match self.lookup.resolve(id) {
            Some(item) => (self.exclude(classify_restore(), &item.item_type), item.context()),
            None => (classify_restore(), ItemContext::unresolved(id)),
        };
        debug!(
            logger = %self.config.slug,
            item_id = %id,
            outcome = %classification,
            "classified restore"
        );
        self.entry(classification, context)
    }

    fn exclude(&self, classification: Classification, item_type: &str) -> Classification {
        match classification {
            Classification::Emit(_) if self.config.is_excluded(item_type) => {
                Classification::Ignore(IgnoreReason::ExcludedType)
            }
            other => other,
        }
    }

    fn entry(&self, classification: Classification, context: ItemContext) -> Option<LogEntry> {
        let kind = classification.kind()?;
        Some(LogEntry::new(
            self.config.slug.clone(),
            self.config.level,
            kind,
            context,
        ))
    }
}

impl<L: ItemLookup, R: EditLinkResolver> EventClassifier for ContentLogger<L, R> {
    fn slug(&self) -> &str {
        &self.config.slug
    }

    fn classify_event(&self, event: &HostEvent) -> Option<LogEntry> {
        match event {
            HostEvent::StatusTransition {
                previous,
                new,
                item,
            } => self.on_status_transition(previous, new, item),
            HostEvent::Deleted { item_id } => self.on_delete(*item_id),
            HostEvent::Restored { item_id } => self.on_restore(*item_id),
        }
    }

    fn render_entry(&self, entry: &LogEntry) -> String {
        self.formatter.format(entry)
    }
}
