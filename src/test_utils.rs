//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

use crate::LifecycleStatus;

/// Every status string the host ships with.
pub(crate) const KNOWN_STATUSES: [&str; 9] = [
    "new",
    "auto-draft",
    "inherit",
    "draft",
    "pending",
    "publish",
    "future",
    "private",
    "trash",
];

/// Strategy: a known status string or an arbitrary host-defined slug.
pub(crate) fn arb_status_str() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(KNOWN_STATUSES.to_vec()).prop_map(str::to_string),
        1 => prop::string::string_regex("[a-z][a-z0-9_-]{0,19}").unwrap(),
    ]
}

/// Strategy: a parsed [`LifecycleStatus`].
pub(crate) fn arb_status() -> impl Strategy<Value = LifecycleStatus> {
    arb_status_str().prop_map(LifecycleStatus::from)
}

/// Strategy: an untrusted display string, including markup-significant characters.
pub(crate) fn arb_display_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 <>&\"'/=.-]{0,40}").unwrap()
}
