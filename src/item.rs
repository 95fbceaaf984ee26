use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::LifecycleStatus;

/// Opaque identifier of a content item, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// The host's view of an item at the time an event fires.
///
/// Type and title are passed through opaquely; an item whose title or type
/// could not be determined simply carries empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSnapshot {
    /// Host identifier
    pub id: ItemId,
    /// Content type slug (e.g., "post", "page", "product")
    pub item_type: String,
    /// Display title
    pub title: String,
    /// Current lifecycle status
    pub status: LifecycleStatus,
    /// Whether this item is a revision of another item
    pub is_revision: bool,
}

impl ItemSnapshot {
    /// Creates a snapshot of a primary item.
    pub fn new(
        id: impl Into<ItemId>,
        item_type: impl Into<String>,
        title: impl Into<String>,
        status: impl Into<LifecycleStatus>,
    ) -> Self {
        Self {
            id: id.into(),
            item_type: item_type.into(),
            title: title.into(),
            status: status.into(),
            is_revision: false,
        }
    }

    /// Marks the snapshot as a revision.
    pub fn as_revision(mut self) -> Self {
        self.is_revision = true;
        self
    }

    /// Builds the log context for this item.
    pub fn context(&self) -> ItemContext {
        ItemContext::new(self.id, self.item_type.clone(), self.title.clone())
    }
}

/// Structured context stored with a log entry.
///
/// Field names double as template placeholder keys: `item_id`, `item_type`
/// and `item_title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemContext {
    /// Host identifier of the item
    pub item_id: ItemId,
    /// Content type slug
    #[serde(default)]
    pub item_type: String,
    /// Display title at log time
    #[serde(default)]
    pub item_title: String,
}

impl ItemContext {
    /// Placeholder key for the item id.
    pub const ITEM_ID: &'static str = "item_id";
    /// Placeholder key for the item type.
    pub const ITEM_TYPE: &'static str = "item_type";
    /// Placeholder key for the item title.
    pub const ITEM_TITLE: &'static str = "item_title";

    /// Creates a context from its parts.
    pub fn new(item_id: ItemId, item_type: impl Into<String>, item_title: impl Into<String>) -> Self {
        Self {
            item_id,
            item_type: item_type.into(),
            item_title: item_title.into(),
        }
    }

    /// Creates a context for an item the host could no longer resolve.
    pub fn unresolved(item_id: ItemId) -> Self {
        Self::new(item_id, String::new(), String::new())
    }

    /// Returns the context as ordered `(key, value)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use content_audit::{ItemContext, ItemId};
    ///
    /// let ctx = ItemContext::new(ItemId(7), "page", "About");
    /// assert_eq!(
    ///     ctx.fields(),
    ///     [("item_id", "7".to_string()), ("item_type", "page".to_string()), ("item_title", "About".to_string())],
    /// );
    /// ```
    pub fn fields(&self) -> [(&'static str, String); 3] {
        [
            (Self::ITEM_ID, self.item_id.to_string()),
            (Self::ITEM_TYPE, self.item_type.clone()),
            (Self::ITEM_TITLE, self.item_title.clone()),
        ]
    }
}

/// Resolves item identity and state by id.
///
/// Returns `None` when the item no longer exists. Callers degrade to empty
/// values or skip logging; a failed lookup is never an error.
pub trait ItemLookup {
    /// Looks up the current snapshot of `id`.
    fn resolve(&self, id: ItemId) -> Option<ItemSnapshot>;
}

/// Resolves the edit link of an item at render time.
///
/// Links are not stored with log entries, so a link may point to an item
/// that has since been deleted. `None` or an empty string means no link.
pub trait EditLinkResolver {
    /// Returns the edit link for `id`, if one can be built.
    fn edit_link(&self, id: ItemId) -> Option<String>;
}

impl<T: ItemLookup + ?Sized> ItemLookup for &T {
    fn resolve(&self, id: ItemId) -> Option<ItemSnapshot> {
        (**self).resolve(id)
    }
}

impl<T: ItemLookup + ?Sized> ItemLookup for Rc<T> {
    fn resolve(&self, id: ItemId) -> Option<ItemSnapshot> {
        (**self).resolve(id)
    }
}

impl<T: EditLinkResolver + ?Sized> EditLinkResolver for &T {
    fn edit_link(&self, id: ItemId) -> Option<String> {
        (**self).edit_link(id)
    }
}

impl<T: EditLinkResolver + ?Sized> EditLinkResolver for Rc<T> {
    fn edit_link(&self, id: ItemId) -> Option<String> {
        (**self).edit_link(id)
    }
}

/// In-memory item store implementing both lookup traits.
///
/// Intended for tests and single-threaded hosts that mirror their content
/// table in memory. Edit links are built from a pattern in which
/// `{item_id}` is replaced by the item's id.
///
/// # Examples
///
/// ```
/// use content_audit::{EditLinkResolver, InMemoryItems, ItemId, ItemLookup, ItemSnapshot};
///
/// let items = InMemoryItems::with_edit_links("/admin/post.php?post={item_id}&action=edit");
/// items.insert(ItemSnapshot::new(ItemId(3), "post", "Hello", "publish"));
///
/// assert_eq!(items.resolve(ItemId(3)).unwrap().title, "Hello");
/// assert_eq!(
///     items.edit_link(ItemId(3)).as_deref(),
///     Some("/admin/post.php?post=3&action=edit"),
/// );
/// assert!(items.edit_link(ItemId(4)).is_none());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryItems {
    items: RefCell<HashMap<ItemId, ItemSnapshot>>,
    link_pattern: Option<String>,
}

impl InMemoryItems {
    /// Creates an empty store that resolves no edit links.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that builds edit links from `pattern`.
    pub fn with_edit_links(pattern: impl Into<String>) -> Self {
        Self {
            items: RefCell::new(HashMap::new()),
            link_pattern: Some(pattern.into()),
        }
    }

    /// Inserts or replaces an item, returning the previous snapshot.
    pub fn insert(&self, item: ItemSnapshot) -> Option<ItemSnapshot> {
        self.items.borrow_mut().insert(item.id, item)
    }

    /// Removes an item, returning its last snapshot.
    pub fn remove(&self, id: ItemId) -> Option<ItemSnapshot> {
        self.items.borrow_mut().remove(&id)
    }

    /// Updates the status of an existing item. Returns `false` if absent.
    pub fn set_status(&self, id: ItemId, status: impl Into<LifecycleStatus>) -> bool {
        match self.items.borrow_mut().get_mut(&id) {
            Some(item) => {
                item.status = status.into();
                true
            }
            None => false,
        }
    }

    /// Returns the number of stored items.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns `true` if no items are stored.
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl ItemLookup for InMemoryItems {
    fn resolve(&self, id: ItemId) -> Option<ItemSnapshot> {
        self.items.borrow().get(&id).cloned()
    }
}

impl EditLinkResolver for InMemoryItems {
    fn edit_link(&self, id: ItemId) -> Option<String> {
        let pattern = self.link_pattern.as_deref()?;
        if !self.items.borrow().contains_key(&id) {
            return None;
        }
        Some(crate::interpolate(pattern, [(ItemContext::ITEM_ID, id.to_string())]))
    }
}
