//! Route handlers organized by resource

pub mod health;
pub mod index;
pub mod joyas;

use super::error::ApiError;

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
