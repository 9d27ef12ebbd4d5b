//! Error types for doppel-core

use thiserror::Error;

/// Configuration errors, fatal at service construction
///
/// The service refuses to come up on a malformed entry rather than
/// silently defaulting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Distance suffix that does not parse as a non-negative integer
    #[error("Invalid fuzzy distance '{value}' for field '{field}'")]
    InvalidDistance { field: String, value: String },

    /// Comparison field identifier that is not `schema.element[.qualifier]`
    #[error("Invalid comparison field: {0}")]
    InvalidField(#[from] doppel_domain::FieldParseError),

    /// Transformer pattern that does not compile
    #[error("Invalid transformer pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Search backend failures
///
/// These propagate to the caller unchanged; the core performs no
/// retry and no partial-result fallback.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The backend rejected or failed the query
    #[error("Search backend error: {message}")]
    Backend { message: String },

    /// The backend could not be reached
    #[error("Request failed: {message}")]
    Http { message: String },

    /// The backend answered with something other than a result envelope
    #[error("Invalid backend response: {message}")]
    InvalidResponse { message: String },
}
