use crate::{render, EditLinkResolver, ItemId, LogEntry};

/// Placeholder key for the edit link resolved at render time.
pub const EDIT_LINK: &str = "edit_link";

/// An [`EditLinkResolver`] that never resolves a link.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLinks;

impl EditLinkResolver for NoLinks {
    fn edit_link(&self, _id: ItemId) -> Option<String> {
        None
    }
}

/// Renders stored log entries for HTML display.
///
/// The edit link is looked up when the entry is rendered, not when it was
/// logged, so it always points at the item's current edit screen; for an
/// item deleted since, it may be missing or dead. Item type, title and link
/// are HTML-escaped before substitution.
///
/// When a link resolves and the entry carries its kind's standard template,
/// the kind's linked template is used instead, wrapping the title in an
/// anchor. Otherwise the stored template is rendered as-is, with
/// `{edit_link}` available to custom templates.
///
/// # Examples
///
/// ```
/// use content_audit::{EntryFormatter, EventKind, InMemoryItems, ItemContext, ItemId,
///     ItemSnapshot, LogEntry, LogLevel};
///
/// let items = InMemoryItems::with_edit_links("/edit/{item_id}");
/// items.insert(ItemSnapshot::new(ItemId(4), "post", "Tom & Jerry", "publish"));
///
/// let entry = LogEntry::new("content", LogLevel::Info, EventKind::Updated,
///     ItemContext::new(ItemId(4), "post", "Tom & Jerry"));
///
/// let formatter = EntryFormatter::new(&items);
/// assert_eq!(
///     formatter.format(&entry),
///     r#"Updated post <a href="/edit/4">"Tom &amp; Jerry"</a>"#,
/// );
///
/// items.remove(ItemId(4));
/// assert_eq!(formatter.format(&entry), r#"Updated post "Tom &amp; Jerry""#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntryFormatter<R = NoLinks> {
    resolver: R,
}

impl EntryFormatter<NoLinks> {
    /// Creates a formatter that never links titles.
    pub fn without_links() -> Self {
        Self { resolver: NoLinks }
    }
}

impl<R: EditLinkResolver> EntryFormatter<R> {
    /// Creates a formatter resolving links through `resolver`.
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Returns the link resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Renders `entry` as HTML.
    pub fn format(&self, entry: &LogEntry) -> String {
        let ctx = entry.context();
        let link = self
            .resolver
            .edit_link(ctx.item_id)
            .filter(|link| !link.is_empty());

        let kind = entry.kind();
        let template = match &link {
            Some(_) if entry.message() == kind.template() => kind.linked_template(),
            _ => entry.message(),
        };

        let [id, item_type, title] = ctx.fields();
        render(
            template,
            [id, item_type, title, (EDIT_LINK, link.unwrap_or_default())],
        )
    }

    /// Renders `entry` as a single plain-text line, without a link.
    pub fn format_plain(&self, entry: &LogEntry) -> String {
        entry.to_string()
    }
}
