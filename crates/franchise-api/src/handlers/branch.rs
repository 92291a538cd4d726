// ============================================================================
// Franchise API - Branch Handlers
// File: crates/franchise-api/src/handlers/branch.rs
// ============================================================================

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use franchise_core::Branch;

use crate::dto::NameRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/franchises/{franchiseId}/branches
pub async fn add_branch(
    State(state): State<AppState>,
    Path(franchise_id): Path<String>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<Json<Branch>, ApiError> {
    let Json(req) = payload?;
    let branch = state
        .use_cases
        .add_branch
        .execute(&franchise_id, req.name())
        .await?;
    Ok(Json(branch))
}

/// PATCH /api/branches/{branchId}/name
pub async fn update_branch_name(
    State(state): State<AppState>,
    Path(branch_id): Path<String>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<Json<Branch>, ApiError> {
    let Json(req) = payload?;
    let branch = state
        .use_cases
        .update_branch_name
        .execute(&branch_id, req.name())
        .await?;
    Ok(Json(branch))
}
