use serde::{Deserialize, Serialize};

/// Standardized error response format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

/// List response format
#[derive(Debug, Serialize)]
pub struct ListResponse<T, F = ()> {
    /// Number of items returned
    pub total: usize,

    /// Filters that produced this list
    pub filter: F,

    /// The data items
    pub data: Vec<T>,
}

impl<T, F> ListResponse<T, F> {
    pub fn new(data: Vec<T>, filter: F) -> Self {
        Self {
            total: data.len(),
            filter,
            data,
        }
    }
}
