// ============================================================================
// Franchise Infrastructure - PostgreSQL Product Repository
// File: crates/franchise-infrastructure/src/database/postgres/product_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::debug;

use franchise_core::error::DomainError;
use franchise_core::repositories::{ProductDocument, ProductRepository};
use franchise_core::services::franchise_service::PRODUCT_NAME_TAKEN;
use franchise_shared::new_id;

use super::{save_error, storage_error};

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    pub id: String,
    pub branch_id: String,
    pub name: String,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductRow> for ProductDocument {
    fn from(row: ProductRow) -> Self {
        ProductDocument {
            id: Some(row.id),
            branch_id: row.branch_id,
            name: row.name,
            stock: row.stock,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<ProductDocument>, DomainError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, branch_id, name, stock, created_at, updated_at
            FROM products
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| storage_error("finding product by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| storage_error("checking product id", e))
    }

    async fn exists_by_branch_id_and_name(&self, branch_id: &str, name: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE branch_id = $1 AND name = $2)")
            .bind(branch_id)
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| storage_error("checking product name", e))
    }

    async fn find_all_by_branch_id(&self, branch_id: &str) -> Result<Vec<ProductDocument>, DomainError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, branch_id, name, stock, created_at, updated_at
            FROM products
            WHERE branch_id = $1
            ORDER BY created_at, id
            "#
        )
        .bind(branch_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| storage_error("listing products of branch", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_top_by_branch_id_order_by_stock_desc(
        &self,
        branch_id: &str,
    ) -> Result<Option<ProductDocument>, DomainError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, branch_id, name, stock, created_at, updated_at
            FROM products
            WHERE branch_id = $1
            ORDER BY stock DESC, id ASC
            LIMIT 1
            "#
        )
        .bind(branch_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| storage_error("finding top product of branch", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn save(&self, product: &ProductDocument) -> Result<ProductDocument, DomainError> {
        let id = product.id.clone().unwrap_or_else(new_id);
        debug!("Saving product {}", id);

        let row: ProductRow = sqlx::query_as(
            r#"
            INSERT INTO products (id, branch_id, name, stock, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
            SET branch_id = EXCLUDED.branch_id,
                name = EXCLUDED.name,
                stock = EXCLUDED.stock,
                updated_at = EXCLUDED.updated_at
            RETURNING id, branch_id, name, stock, created_at, updated_at
            "#
        )
        .bind(&id)
        .bind(&product.branch_id)
        .bind(&product.name)
        .bind(product.stock)
        .bind(product.created_at)
        .bind(product.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| save_error("saving product", e, PRODUCT_NAME_TAKEN))?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| storage_error("deleting product", e))?;

        Ok(())
    }
}
