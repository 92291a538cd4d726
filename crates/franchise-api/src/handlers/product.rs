// ============================================================================
// Franchise API - Product Handlers
// File: crates/franchise-api/src/handlers/product.rs
// ============================================================================

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use franchise_core::Product;

use crate::dto::{CreateProductRequest, NameRequest, UpdateStockRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/branches/{branchId}/products
pub async fn add_product(
    State(state): State<AppState>,
    Path(branch_id): Path<String>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Json(req) = payload?;
    let product = state
        .use_cases
        .add_product
        .execute(&branch_id, req.name(), req.stock())
        .await?;
    Ok(Json(product))
}

/// DELETE /api/products/{productId}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.use_cases.delete_product.execute(&product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/products/{productId}/stock
pub async fn update_product_stock(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    payload: Result<Json<UpdateStockRequest>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Json(req) = payload?;
    let product = state
        .use_cases
        .update_product_stock
        .execute(&product_id, req.stock())
        .await?;
    Ok(Json(product))
}

/// PATCH /api/products/{productId}/name
pub async fn update_product_name(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Json(req) = payload?;
    let product = state
        .use_cases
        .update_product_name
        .execute(&product_id, req.name())
        .await?;
    Ok(Json(product))
}
