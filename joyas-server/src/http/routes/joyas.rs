//! Inventory endpoints
//!
//! Parameters are validated by `joyas-core` before the repository runs any
//! statement, so a rejected request never reaches the database.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use joyas_core::{
    FilterParams, FilterRequest, InventoryItem, ListingParams, ListingRequest, ResponseShaper,
    ResultEnvelope,
};

use crate::db::repos::InventoryRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidItemId, ValidQuery};
use crate::http::server::AppState;

/// GET /joyas - paginated, sorted listing
async fn list_joyas(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<ListingParams>,
) -> Result<Json<ResultEnvelope>, ApiError> {
    let req = ListingRequest::from_params(&params)?;
    let items = InventoryRepo::new(&state.pool).list(&req).await?;

    Ok(Json(ResponseShaper::shape(&items)))
}

/// GET /joyas/filtros - listing restricted by price range, category and metal
async fn filter_joyas(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<FilterParams>,
) -> Result<Json<ResultEnvelope>, ApiError> {
    let req = FilterRequest::from_params(&params)?;
    let items = InventoryRepo::new(&state.pool).filter(&req).await?;

    Ok(Json(ResponseShaper::shape(&items)))
}

/// GET /joyas/{id} - a single item
async fn get_joya(
    State(state): State<Arc<AppState>>,
    ValidItemId(id): ValidItemId,
) -> Result<Json<InventoryItem>, ApiError> {
    let item = InventoryRepo::new(&state.pool).get(id).await?;
    Ok(Json(item))
}

/// Inventory routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/joyas", get(list_joyas))
        .route("/joyas/filtros", get(filter_joyas))
        .route("/joyas/{id}", get(get_joya))
}
