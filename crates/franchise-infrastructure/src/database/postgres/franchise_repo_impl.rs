// ============================================================================
// Franchise Infrastructure - PostgreSQL Franchise Repository
// File: crates/franchise-infrastructure/src/database/postgres/franchise_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::debug;

use franchise_core::error::DomainError;
use franchise_core::health::DbHealthPort;
use franchise_core::repositories::{FranchiseDocument, FranchiseRepository};
use franchise_core::services::franchise_service::FRANCHISE_NAME_TAKEN;
use franchise_shared::new_id;

use super::{save_error, storage_error};

#[derive(Clone)]
pub struct PgFranchiseRepository {
    pool: PgPool,
}

impl PgFranchiseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct FranchiseRow {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FranchiseRow> for FranchiseDocument {
    fn from(row: FranchiseRow) -> Self {
        FranchiseDocument {
            id: Some(row.id),
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl FranchiseRepository for PgFranchiseRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<FranchiseDocument>, DomainError> {
        let row: Option<FranchiseRow> = sqlx::query_as(
            r#"
            SELECT id, name, created_at, updated_at
            FROM franchises
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| storage_error("finding franchise by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM franchises WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| storage_error("checking franchise id", e))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM franchises WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| storage_error("checking franchise name", e))
    }

    async fn save(&self, franchise: &FranchiseDocument) -> Result<FranchiseDocument, DomainError> {
        let id = franchise.id.clone().unwrap_or_else(new_id);
        debug!("Saving franchise {}", id);

        let row: FranchiseRow = sqlx::query_as(
            r#"
            INSERT INTO franchises (id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                updated_at = EXCLUDED.updated_at
            RETURNING id, name, created_at, updated_at
            "#
        )
        .bind(&id)
        .bind(&franchise.name)
        .bind(franchise.created_at)
        .bind(franchise.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| save_error("saving franchise", e, FRANCHISE_NAME_TAKEN))?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM franchises WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| storage_error("deleting franchise", e))?;

        Ok(())
    }
}

#[async_trait]
impl DbHealthPort for PgFranchiseRepository {
    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM franchises")
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| storage_error("counting franchises", e))?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
