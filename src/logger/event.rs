//! Host lifecycle events.

use std::fmt;

use crate::{ItemId, ItemSnapshot, LifecycleStatus};

/// A lifecycle event forwarded by the host adapter.
///
/// The host guarantees one event per physical change; loggers do not
/// deduplicate. New variants may be added for other feature areas.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HostEvent {
    /// An item's status changed (including no-op saves)
    StatusTransition {
        /// Status before the change
        previous: LifecycleStatus,
        /// Status after the change
        new: LifecycleStatus,
        /// The item after the change
        item: ItemSnapshot,
    },
    /// An item is about to be permanently deleted
    Deleted {
        /// The deleted item
        item_id: ItemId,
    },
    /// An item was restored from the trash
    Restored {
        /// The restored item
        item_id: ItemId,
    },
}

impl HostEvent {
    /// Creates a status-transition event.
    pub fn transition(
        previous: impl Into<LifecycleStatus>,
        new: impl Into<LifecycleStatus>,
        item: ItemSnapshot,
    ) -> Self {
        Self::StatusTransition {
            previous: previous.into(),
            new: new.into(),
            item,
        }
    }

    /// Creates a deletion event.
    pub fn deleted(item_id: impl Into<ItemId>) -> Self {
        Self::Deleted {
            item_id: item_id.into(),
        }
    }

    /// Creates a restore event.
    pub fn restored(item_id: impl Into<ItemId>) -> Self {
        Self::Restored {
            item_id: item_id.into(),
        }
    }

    /// Returns the id of the item the event concerns.
    pub fn item_id(&self) -> ItemId {
        match self {
            Self::StatusTransition { item, .. } => item.id,
            Self::Deleted { item_id } | Self::Restored { item_id } => *item_id,
        }
    }
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostEvent::StatusTransition {
                previous, new, item, ..
            } => write!(f, "status_transition[{} -> {}, item={}]", previous, new, item.id),
            HostEvent::Deleted { item_id } => write!(f, "deleted[item={}]", item_id),
            HostEvent::Restored { item_id } => write!(f, "restored[item={}]", item_id),
        }
    }
}
