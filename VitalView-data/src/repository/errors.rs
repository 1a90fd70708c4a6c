use thiserror::Error;

/// Error type for repository operations
///
/// Lookups never fail; these errors come from building or parsing records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Measurement text could not be parsed
    #[error("Value parse error: {0}")]
    ValueParse(String),

    /// Unknown vital sign category name
    #[error("Unknown vital sign type: {0}")]
    UnknownCategory(String),

    /// Unknown status name
    #[error("Unknown vital sign status: {0}")]
    UnknownStatus(String),
}
