use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A lifecycle status from the host's content-status vocabulary.
///
/// The vocabulary is open: hosts and plugins register their own statuses, so
/// any string that is not one of the well-known values is preserved verbatim
/// in [`LifecycleStatus::Other`]. Parsing never fails, and
/// [`as_str`](Self::as_str) always returns the exact string that was parsed.
///
/// # Examples
///
/// ```
/// use content_audit::LifecycleStatus;
///
/// let status: LifecycleStatus = "auto-draft".into();
/// assert_eq!(status, LifecycleStatus::AutoDraft);
///
/// let custom: LifecycleStatus = "in-review".into();
/// assert_eq!(custom.as_str(), "in-review");
/// assert!(!custom.is_known());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LifecycleStatus {
    /// Status reported for an item that did not exist before the transition
    New,
    /// Placeholder assigned to a freshly allocated, not-yet-edited item
    AutoDraft,
    /// Attachment or shadow item deriving its state from a parent
    Inherit,
    /// Saved but unpublished
    Draft,
    /// Awaiting review
    Pending,
    /// Publicly visible
    Publish,
    /// Scheduled for later publication
    Future,
    /// Visible to privileged users only
    Private,
    /// Moved to the trash, restorable
    Trash,
    /// Any status this crate does not name
    Other(String),
}

impl LifecycleStatus {
    /// Returns the host's string form of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "new",
            Self::AutoDraft => "auto-draft",
            Self::Inherit => "inherit",
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Publish => "publish",
            Self::Future => "future",
            Self::Private => "private",
            Self::Trash => "trash",
            Self::Other(raw) => raw,
        }
    }

    /// Returns `true` for every status except [`LifecycleStatus::Other`].
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Returns `true` for statuses that never represent a user-visible item
    /// on their own (`auto-draft` and `inherit`).
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::AutoDraft | Self::Inherit)
    }
}

impl From<&str> for LifecycleStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "new" => Self::New,
            "auto-draft" => Self::AutoDraft,
            "inherit" => Self::Inherit,
            "draft" => Self::Draft,
            "pending" => Self::Pending,
            "publish" => Self::Publish,
            "future" => Self::Future,
            "private" => Self::Private,
            "trash" => Self::Trash,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for LifecycleStatus {
    fn from(raw: String) -> Self {
        match Self::from(raw.as_str()) {
            // Reuse the allocation for unknown statuses
            Self::Other(_) => Self::Other(raw),
            known => known,
        }
    }
}

impl From<LifecycleStatus> for String {
    fn from(status: LifecycleStatus) -> Self {
        match status {
            LifecycleStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for LifecycleStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_statuses() {
        assert_eq!(LifecycleStatus::from("new"), LifecycleStatus::New);
        assert_eq!(LifecycleStatus::from("auto-draft"), LifecycleStatus::AutoDraft);
        assert_eq!(LifecycleStatus::from("inherit"), LifecycleStatus::Inherit);
        assert_eq!(LifecycleStatus::from("draft"), LifecycleStatus::Draft);
        assert_eq!(LifecycleStatus::from("pending"), LifecycleStatus::Pending);
        assert_eq!(LifecycleStatus::from("publish"), LifecycleStatus::Publish);
        assert_eq!(LifecycleStatus::from("future"), LifecycleStatus::Future);
        assert_eq!(LifecycleStatus::from("private"), LifecycleStatus::Private);
        assert_eq!(LifecycleStatus::from("trash"), LifecycleStatus::Trash);
    }

    #[test]
    fn unknown_status_is_preserved() {
        let status = LifecycleStatus::from("wc-completed");
        assert_eq!(status, LifecycleStatus::Other("wc-completed".to_string()));
        assert_eq!(status.as_str(), "wc-completed");
        assert!(!status.is_known());
    }

    #[test]
    fn parsing_is_case_sensitive() {
        // Host statuses are lowercase slugs; anything else is a different status
        assert!(!LifecycleStatus::from("Publish").is_known());
    }

    #[test]
    fn from_str_never_fails() {
        let status: LifecycleStatus = "".parse().unwrap();
        assert_eq!(status, LifecycleStatus::Other(String::new()));
    }

    #[test]
    fn placeholder_statuses() {
        assert!(LifecycleStatus::AutoDraft.is_placeholder());
        assert!(LifecycleStatus::Inherit.is_placeholder());
        assert!(!LifecycleStatus::New.is_placeholder());
        assert!(!LifecycleStatus::Trash.is_placeholder());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(LifecycleStatus::AutoDraft.to_string(), "auto-draft");
        assert_eq!(LifecycleStatus::from("custom").to_string(), "custom");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&LifecycleStatus::AutoDraft).unwrap();
        assert_eq!(json, "\"auto-draft\"");

        let back: LifecycleStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(back, LifecycleStatus::Other("archived".to_string()));
    }

    mod proptests {
        use super::*;
        use crate::test_utils::arb_status_str;
        use proptest::prelude::*;

        proptest! {
            /// Property: every status string survives a parse/as_str round trip
            #[test]
            fn proptest_status_round_trips(raw in arb_status_str()) {
                let status = LifecycleStatus::from(raw.as_str());
                prop_assert_eq!(status.as_str(), raw.as_str());
                prop_assert_eq!(String::from(status), raw);
            }
        }
    }
}
