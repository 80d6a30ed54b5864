//! Error types for Bookscout Core

use thiserror::Error;

/// Result type alias using ScoutError
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Top-level error type for all Bookscout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by the search path.
///
/// Every failure a search can hit is classified into one of these variants
/// before it crosses the client boundary; callers never see a raw transport
/// error. The `Display` text doubles as the user-facing message.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Explicit 404 from the API, or a 2xx response with no documents
    #[error("No books found matching your search criteria")]
    NotFound,

    #[error("Rate limit exceeded. Please wait a moment before trying again.")]
    RateLimited,

    /// Any other non-success HTTP status
    #[error("API request failed with status {0}")]
    RequestFailed(u16),

    /// Transport-level failure (DNS, connection refused, timeout)
    #[error("Network error. Please check your internet connection.")]
    Network(String),

    #[error("Malformed response from the book database: {0}")]
    BadResponse(String),
}

/// Errors that occur during favorites persistence
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
