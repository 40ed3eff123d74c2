//! Health check endpoint
//!
//! Reports whether the `inventario` table answers; 503 when it does not, so a
//! load balancer stops routing catalog traffic to an instance without storage.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::InventoryRepo;
use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    fn new(database_ok: bool) -> (StatusCode, Self) {
        let (status, code) = if database_ok {
            ("ok", StatusCode::OK)
        } else {
            ("degraded", StatusCode::SERVICE_UNAVAILABLE)
        };

        (
            code,
            Self {
                status,
                database: if database_ok { "ok" } else { "unavailable" },
                version: env!("CARGO_PKG_VERSION"),
            },
        )
    }
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let database_ok = match InventoryRepo::new(&state.pool).ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("health check: inventory database unreachable: {}", e);
            false
        }
    };

    let (code, body) = HealthResponse::new(database_ok);
    (code, Json(body))
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
