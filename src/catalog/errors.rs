//! # Catalog Errors

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Broad classification of a [`CatalogError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field or business rule was violated
    Validation,
    /// Text could not be converted to a number
    Parse,
}

/// Catalog errors
///
/// Display strings are shown verbatim to the user above the catalog list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("title is required")]
    TitleRequired,

    #[error("author is required")]
    AuthorRequired,

    #[error("year is invalid")]
    InvalidYear,

    #[error("all fields are required")]
    MissingFields,

    #[error("year must be a number")]
    YearNotNumber,

    #[error("invalid record id: {0}")]
    InvalidId(String),
}

impl CatalogError {
    /// Get the error classification
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::TitleRequired
            | CatalogError::AuthorRequired
            | CatalogError::InvalidYear
            | CatalogError::MissingFields => ErrorKind::Validation,
            CatalogError::YearNotNumber | CatalogError::InvalidId(_) => ErrorKind::Parse,
        }
    }
}
