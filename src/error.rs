use thiserror::Error;

/// Errors raised while wiring loggers together.
///
/// Classification and rendering are total and have no error type; only
/// setup mistakes made by the host adapter are reported here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A classifier with this slug is already registered.
    #[error("a logger with slug '{slug}' is already registered")]
    DuplicateSlug {
        /// The conflicting slug
        slug: String,
    },
    /// Logger slugs must be non-empty.
    #[error("logger slug must not be empty")]
    EmptySlug,
}
