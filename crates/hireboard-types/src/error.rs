use thiserror::Error;

/// Errors returned by a listing service query.
///
/// The `Display` text is what the user sees after
/// "Error fetching developers: ".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListingError {
    /// Backend or transport failure, message passed through verbatim.
    #[error("{0}")]
    Backend(String),

    #[error("timeout")]
    Timeout,

    /// A returned record failed validation at the service boundary.
    #[error("invalid listing record: {0}")]
    InvalidRecord(String),
}

/// Errors from provider repository writes.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("provider not found")]
    NotFound,

    #[error("invalid provider: {0}")]
    Invalid(String),
}
