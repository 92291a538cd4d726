use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use franchise_core::usecases::DbHealth;
use franchise_shared::constants::FRANCHISES_COLLECTION;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum DbHealthResponse {
    Connected {
        connected: bool,
        collection: &'static str,
        count: u64,
    },
    Disconnected {
        connected: bool,
        error: String,
    },
}

impl From<DbHealth> for DbHealthResponse {
    fn from(health: DbHealth) -> Self {
        match health {
            DbHealth::Connected { count } => DbHealthResponse::Connected {
                connected: true,
                collection: FRANCHISES_COLLECTION,
                count,
            },
            DbHealth::Disconnected { error } => DbHealthResponse::Disconnected {
                connected: false,
                error,
            },
        }
    }
}

/// GET /health
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// GET /health/db
pub async fn db_health_check(State(state): State<AppState>) -> Json<DbHealthResponse> {
    Json(state.db_health.execute().await.into())
}
