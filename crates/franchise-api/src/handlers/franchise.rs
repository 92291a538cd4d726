// ============================================================================
// Franchise API - Franchise Handlers
// File: crates/franchise-api/src/handlers/franchise.rs
// ============================================================================

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use futures::TryStreamExt;

use franchise_core::{Franchise, TopProductByBranch};

use crate::dto::NameRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/franchises
pub async fn create_franchise(
    State(state): State<AppState>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<Json<Franchise>, ApiError> {
    let Json(req) = payload?;
    let franchise = state.use_cases.create_franchise.execute(req.name()).await?;
    Ok(Json(franchise))
}

/// PATCH /api/franchises/{franchiseId}/name
pub async fn update_franchise_name(
    State(state): State<AppState>,
    Path(franchise_id): Path<String>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<Json<Franchise>, ApiError> {
    let Json(req) = payload?;
    let franchise = state
        .use_cases
        .update_franchise_name
        .execute(&franchise_id, req.name())
        .await?;
    Ok(Json(franchise))
}

/// GET /api/franchises/{franchiseId}/top-products
pub async fn top_products(
    State(state): State<AppState>,
    Path(franchise_id): Path<String>,
) -> Result<Json<Vec<TopProductByBranch>>, ApiError> {
    let entries: Vec<TopProductByBranch> = state
        .use_cases
        .top_product_by_branch
        .execute(&franchise_id)
        .try_collect()
        .await?;
    Ok(Json(entries))
}
