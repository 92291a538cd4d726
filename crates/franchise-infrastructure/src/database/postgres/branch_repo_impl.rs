// ============================================================================
// Franchise Infrastructure - PostgreSQL Branch Repository
// File: crates/franchise-infrastructure/src/database/postgres/branch_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::debug;

use franchise_core::error::DomainError;
use franchise_core::repositories::{BranchDocument, BranchRepository};
use franchise_core::services::franchise_service::BRANCH_NAME_TAKEN;
use franchise_shared::new_id;

use super::{save_error, storage_error};

#[derive(Clone)]
pub struct PgBranchRepository {
    pool: PgPool,
}

impl PgBranchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BranchRow {
    pub id: String,
    pub franchise_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BranchRow> for BranchDocument {
    fn from(row: BranchRow) -> Self {
        BranchDocument {
            id: Some(row.id),
            franchise_id: row.franchise_id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl BranchRepository for PgBranchRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<BranchDocument>, DomainError> {
        let row: Option<BranchRow> = sqlx::query_as(
            r#"
            SELECT id, franchise_id, name, created_at, updated_at
            FROM branches
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| storage_error("finding branch by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM branches WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| storage_error("checking branch id", e))
    }

    async fn exists_by_franchise_id_and_name(&self, franchise_id: &str, name: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM branches WHERE franchise_id = $1 AND name = $2)")
            .bind(franchise_id)
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| storage_error("checking branch name", e))
    }

    async fn find_all_by_franchise_id(&self, franchise_id: &str) -> Result<Vec<BranchDocument>, DomainError> {
        let rows: Vec<BranchRow> = sqlx::query_as(
            r#"
            SELECT id, franchise_id, name, created_at, updated_at
            FROM branches
            WHERE franchise_id = $1
            ORDER BY created_at, id
            "#
        )
        .bind(franchise_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| storage_error("listing branches of franchise", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn save(&self, branch: &BranchDocument) -> Result<BranchDocument, DomainError> {
        let id = branch.id.clone().unwrap_or_else(new_id);
        debug!("Saving branch {}", id);

        let row: BranchRow = sqlx::query_as(
            r#"
            INSERT INTO branches (id, franchise_id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET franchise_id = EXCLUDED.franchise_id,
                name = EXCLUDED.name,
                updated_at = EXCLUDED.updated_at
            RETURNING id, franchise_id, name, created_at, updated_at
            "#
        )
        .bind(&id)
        .bind(&branch.franchise_id)
        .bind(&branch.name)
        .bind(branch.created_at)
        .bind(branch.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| save_error("saving branch", e, BRANCH_NAME_TAKEN))?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM branches WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| storage_error("deleting branch", e))?;

        Ok(())
    }
}
