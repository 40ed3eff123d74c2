//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Storage failures are logged and reported with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use joyas_core::QueryError;
use serde_json::json;

use crate::db::repos::DbError;

/// Message returned for any failure that is not the caller's fault
pub const INTERNAL_ERROR_MESSAGE: &str = "Ocurrió un error interno del servidor";

/// Message returned for unknown routes
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Ruta no encontrada";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Query parameter rejected before reaching the database (400)
    Query(QueryError),

    /// Query string could not be deserialized, e.g. a repeated key (400)
    InvalidQuery { reason: String },

    /// Path segment could not be parsed (400)
    InvalidPath { field: &'static str, value: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// No route matched (404)
    RouteNotFound,

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Query(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": e.kind(),
                    "message": e.to_string()
                }),
            ),
            Self::InvalidQuery { reason } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "invalid_query",
                    "message": reason
                }),
            ),
            Self::InvalidPath { field, value } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "invalid_path",
                    "message": format!("invalid {}: '{}'", field, value)
                }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
            Self::RouteNotFound => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": ROUTE_NOT_FOUND_MESSAGE
                }),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": INTERNAL_ERROR_MESSAGE
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        Self::Query(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}
