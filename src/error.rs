use std::io;
use thiserror::Error;

/// Custom error type for the procview library
#[derive(Error, Debug)]
pub enum ProcviewError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown sort field: {0}")]
    InvalidSortField(String),

    #[error("Unknown sort direction: {0} (expected 'asc' or 'desc')")]
    InvalidSortDirection(String),

    #[error("Unknown process status: {0}")]
    InvalidStatus(String),

    #[error("Invalid filter expression: {0}")]
    InvalidFilterExpression(String),
}

/// Result type alias for the procview library
pub type Result<T> = std::result::Result<T, ProcviewError>;

impl ProcviewError {
    pub fn invalid_sort_field<S: Into<String>>(field: S) -> Self {
        ProcviewError::InvalidSortField(field.into())
    }

    pub fn invalid_sort_direction<S: Into<String>>(direction: S) -> Self {
        ProcviewError::InvalidSortDirection(direction.into())
    }

    pub fn invalid_status<S: Into<String>>(status: S) -> Self {
        ProcviewError::InvalidStatus(status.into())
    }

    /// Create a filter expression error (e.g. `">abc"` on the command line)
    pub fn invalid_filter_expression<S: Into<String>>(expr: S) -> Self {
        ProcviewError::InvalidFilterExpression(expr.into())
    }
}
