//! Validation errors raised before any SQL is built

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

/// Rejected request parameter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// `order_by` names a column or direction outside the allow-list
    #[error("invalid sort field: '{value}'")]
    InvalidSortField { value: String },

    /// `limits` or `page` is non-numeric, non-positive or overflows the offset
    #[error("invalid pagination value for {field}: '{value}'")]
    InvalidPagination { field: &'static str, value: String },

    /// Numeric filter received something that is not an integer
    #[error("invalid value for filter {field}: '{value}'")]
    InvalidFilterValue { field: &'static str, value: String },
}

impl QueryError {
    /// Stable machine-readable kind, used as the `error` field of API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSortField { .. } => "invalid_sort_field",
            Self::InvalidPagination { .. } => "invalid_pagination",
            Self::InvalidFilterValue { .. } => "invalid_filter_value",
        }
    }
}
