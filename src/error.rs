//! Error type shared by the catalog, the user directory and the stores.

use thiserror::Error;

/// Failure of a single catalog or directory operation.
///
/// Each variant maps to one HTTP status in the transport layer. None of them is
/// fatal to the process: the request fails and the server keeps serving.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Missing or unparseable required input (400).
    #[error("{0}")]
    Validation(String),

    /// The id does not resolve to a record (404).
    #[error("{0}")]
    NotFound(String),

    /// Credentials did not match any directory entry (401).
    #[error("{0}")]
    Unauthorized(String),

    /// The backing store failed; the message is the store's own (500).
    #[error("{0}")]
    Backend(String),
}

impl CatalogError {
    pub fn movie_not_found(raw_id: &str) -> Self {
        CatalogError::NotFound(format!("The movie with ID {} does not exist", raw_id))
    }

    pub fn user_not_found(raw_id: &str) -> Self {
        CatalogError::NotFound(format!("The user with ID {} does not exist", raw_id))
    }
}

impl From<sqlx::Error> for CatalogError {
    fn from(e: sqlx::Error) -> Self {
        CatalogError::Backend(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
