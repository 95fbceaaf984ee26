use serde::{Deserialize, Serialize};

use crate::LogLevel;

/// Settings for a [`ContentLogger`](crate::ContentLogger).
///
/// Every field has a default, so hosts can deserialize a partial JSON
/// object or start from [`Default`] and adjust with the `with_*` methods.
///
/// # Examples
///
/// ```
/// use content_audit::{ContentLoggerConfig, LogLevel};
///
/// let config: ContentLoggerConfig =
///     serde_json::from_str(r#"{"excluded_types": ["shop_order"]}"#).unwrap();
/// assert_eq!(config.slug, "content");
/// assert_eq!(config.level, LogLevel::Info);
/// assert!(config.is_excluded("shop_order"));
/// assert!(!config.is_excluded("post"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentLoggerConfig {
    /// Logger slug stored with every entry
    pub slug: String,
    /// Level stored with every entry
    pub level: LogLevel,
    /// Item types that are never logged
    pub excluded_types: Vec<String>,
}

impl ContentLoggerConfig {
    /// Default logger slug.
    pub const DEFAULT_SLUG: &'static str = "content";

    /// Sets the logger slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the entry level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Adds an item type to the exclusion list.
    pub fn exclude_type(mut self, item_type: impl Into<String>) -> Self {
        let item_type = item_type.into();
        if !self.excluded_types.contains(&item_type) {
            self.excluded_types.push(item_type);
        }
        self
    }

    /// Clears the exclusion list, so every item type is logged.
    pub fn include_all_types(mut self) -> Self {
        self.excluded_types.clear();
        self
    }

    /// Returns `true` if entries for `item_type` are suppressed.
    pub fn is_excluded(&self, item_type: &str) -> bool {
        self.excluded_types.iter().any(|t| t == item_type)
    }
}

impl Default for ContentLoggerConfig {
    fn default() -> Self {
        Self {
            slug: Self::DEFAULT_SLUG.to_string(),
            level: LogLevel::Info,
            excluded_types: Vec::new(),
        }
    }
}
