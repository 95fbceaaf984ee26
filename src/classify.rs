//! Lifecycle transition classification.
//!
//! This module decides which single semantic event a lifecycle change
//! represents. Every function here is pure and total: the same inputs always
//! produce the same [`Classification`], unknown statuses are accepted, and
//! there are no error cases.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::LifecycleStatus;

/// The semantic event recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// An item left the auto-draft placeholder state
    Created,
    /// Any other status change, including no-op saves
    Updated,
    /// The item was moved to the trash
    Trashed,
    /// The item was permanently deleted
    Deleted,
    /// The item was restored from the trash
    Restored,
}

impl EventKind {
    /// Returns the message template stored with entries of this kind.
    ///
    /// Placeholders reference the keys of [`ItemContext`](crate::ItemContext).
    pub fn template(self) -> &'static str {
        match self {
            Self::Created => r#"Created {item_type} "{item_title}""#,
            Self::Updated => r#"Updated {item_type} "{item_title}""#,
            Self::Trashed => r#"Moved {item_type} "{item_title}" to the trash"#,
            Self::Deleted => r#"Deleted {item_type} "{item_title}""#,
            Self::Restored => r#"Restored {item_type} "{item_title}" from trash"#,
        }
    }

    /// Returns the display template that links the title to `{edit_link}`.
    pub fn linked_template(self) -> &'static str {
        match self {
            Self::Created => r#"Created {item_type} <a href="{edit_link}">"{item_title}"</a>"#,
            Self::Updated => r#"Updated {item_type} <a href="{edit_link}">"{item_title}"</a>"#,
            Self::Trashed => {
                r#"Moved {item_type} <a href="{edit_link}">"{item_title}"</a> to the trash"#
            }
            Self::Deleted => r#"Deleted {item_type} <a href="{edit_link}">"{item_title}"</a>"#,
            Self::Restored => {
                r#"Restored {item_type} <a href="{edit_link}">"{item_title}"</a> from trash"#
            }
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Created => write!(f, "created"),
            EventKind::Updated => write!(f, "updated"),
            EventKind::Trashed => write!(f, "trashed"),
            EventKind::Deleted => write!(f, "deleted"),
            EventKind::Restored => write!(f, "restored"),
        }
    }
}

/// Why a lifecycle change produced no log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The changed entity is a revision snapshot
    Revision,
    /// Auto-draft or attachment-shadow transition with no visible meaning
    Placeholder,
    /// Deletion of an auto-draft or inherit item
    ShadowItem,
    /// The item type is excluded by configuration
    ExcludedType,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::Revision => write!(f, "revision"),
            IgnoreReason::Placeholder => write!(f, "placeholder"),
            IgnoreReason::ShadowItem => write!(f, "shadow_item"),
            IgnoreReason::ExcludedType => write!(f, "excluded_type"),
        }
    }
}

/// Outcome of classifying one lifecycle change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The change should be logged as this event
    Emit(EventKind),
    /// The change should not be logged
    Ignore(IgnoreReason),
}

impl Classification {
    /// Returns the event kind to log, if any.
    pub fn kind(self) -> Option<EventKind> {
        match self {
            Self::Emit(kind) => Some(kind),
            Self::Ignore(_) => None,
        }
    }

    /// Returns `true` if nothing should be logged.
    pub fn is_ignored(self) -> bool {
        matches!(self, Self::Ignore(_))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Emit(kind) => write!(f, "{}", kind),
            Classification::Ignore(reason) => write!(f, "ignored ({})", reason),
        }
    }
}

/// One lifecycle change of one item.
///
/// # Examples
///
/// ```
/// use content_audit::{Classification, EventKind, Transition};
///
/// let transition = Transition::new("auto-draft", "draft");
/// assert_eq!(transition.classify(), Classification::Emit(EventKind::Created));
///
/// let revision = Transition::new("auto-draft", "draft").revision(true);
/// assert!(revision.classify().is_ignored());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition {
    previous: LifecycleStatus,
    new: LifecycleStatus,
    is_revision: bool,
}

impl Transition {
    /// Creates a transition of a primary (non-revision) item.
    pub fn new(previous: impl Into<LifecycleStatus>, new: impl Into<LifecycleStatus>) -> Self {
        Self {
            previous: previous.into(),
            new: new.into(),
            is_revision: false,
        }
    }

    /// Marks whether the changed entity is a revision snapshot.
    pub fn revision(mut self, is_revision: bool) -> Self {
        self.is_revision = is_revision;
        self
    }

    /// Returns the status before the change.
    pub fn previous(&self) -> &LifecycleStatus {
        &self.previous
    }

    /// Returns the status after the change.
    pub fn new_status(&self) -> &LifecycleStatus {
        &self.new
    }

    /// Returns `true` if the changed entity is a revision.
    pub fn is_revision(&self) -> bool {
        self.is_revision
    }

    /// Classifies this transition. See [`classify`].
    pub fn classify(&self) -> Classification {
        classify(&self.previous, &self.new, self.is_revision)
    }
}

/// Classifies a status change.
///
/// Rules are evaluated in order and the first match wins. Several conditions
/// can hold at once, so the order is part of the contract:
///
/// 1. revisions are ignored;
/// 2. leaving `auto-draft` for anything but `auto-draft` or `inherit` is a creation;
/// 3. entering `auto-draft`, or `new` -> `inherit`, is ignored as a placeholder;
/// 4. entering `trash` is a trashing;
/// 5. everything else is an update, including `publish` -> `publish`.
///
/// # Examples
///
/// ```
/// use content_audit::{classify, Classification, EventKind, LifecycleStatus};
///
/// let outcome = classify(&LifecycleStatus::Pending, &LifecycleStatus::Trash, false);
/// assert_eq!(outcome, Classification::Emit(EventKind::Trashed));
///
/// // Unknown statuses fall through to an update
/// let outcome = classify(&"draft".into(), &"in-review".into(), false);
/// assert_eq!(outcome, Classification::Emit(EventKind::Updated));
/// ```
pub fn classify(
    previous: &LifecycleStatus,
    new: &LifecycleStatus,
    is_revision: bool,
) -> Classification {
    use LifecycleStatus::{AutoDraft, Inherit, New, Trash};

    if is_revision {
        return Classification::Ignore(IgnoreReason::Revision);
    }

    if *previous == AutoDraft && !matches!(new, AutoDraft | Inherit) {
        return Classification::Emit(EventKind::Created);
    }

    // The new -> inherit clause covers attachment shadows; its exact scope
    // is uncertain, so it keeps its position behind the creation rule.
    if *new == AutoDraft || (*previous == New && *new == Inherit) {
        return Classification::Ignore(IgnoreReason::Placeholder);
    }

    if *new == Trash {
        return Classification::Emit(EventKind::Trashed);
    }

    Classification::Emit(EventKind::Updated)
}

/// Classifies a permanent deletion of an item in `status`.
///
/// Auto-draft and inherit items are never meaningfully deleted from a
/// user's point of view, so they are ignored along with revisions.
///
/// # Examples
///
/// ```
/// use content_audit::{classify_delete, Classification, EventKind, LifecycleStatus};
///
/// assert!(classify_delete(&LifecycleStatus::AutoDraft, false).is_ignored());
/// assert_eq!(
///     classify_delete(&LifecycleStatus::Publish, false),
///     Classification::Emit(EventKind::Deleted),
/// );
/// ```
pub fn classify_delete(status: &LifecycleStatus, is_revision: bool) -> Classification {
    if is_revision {
        Classification::Ignore(IgnoreReason::Revision)
    } else if status.is_placeholder() {
        Classification::Ignore(IgnoreReason::ShadowItem)
    } else {
        Classification::Emit(EventKind::Deleted)
    }
}

/// Classifies a restore from the trash. Always [`EventKind::Restored`].
pub fn classify_restore() -> Classification {
    Classification::Emit(EventKind::Restored)
}
