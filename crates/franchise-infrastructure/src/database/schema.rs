// ============================================================================
// Franchise Infrastructure - Schema Provisioning
// File: crates/franchise-infrastructure/src/database/schema.rs
// Description: Idempotent table and index creation run at startup
// ============================================================================

use sqlx::PgPool;
use tracing::{error, info};

use franchise_shared::constants::{BRANCHES_COLLECTION, FRANCHISES_COLLECTION, PRODUCTS_COLLECTION};

const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS franchises (
        id          TEXT PRIMARY KEY,
        name        TEXT NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL,
        updated_at  TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS branches (
        id            TEXT PRIMARY KEY,
        franchise_id  TEXT NOT NULL,
        name          TEXT NOT NULL,
        created_at    TIMESTAMPTZ NOT NULL,
        updated_at    TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id          TEXT PRIMARY KEY,
        branch_id   TEXT NOT NULL,
        name        TEXT NOT NULL,
        stock       INTEGER NOT NULL CHECK (stock >= 0),
        created_at  TIMESTAMPTZ NOT NULL,
        updated_at  TIMESTAMPTZ NOT NULL
    )
    "#,
];

/// A secondary index on one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSpec {
    pub name: &'static str,
    pub table: &'static str,
    /// Column list as it appears inside `ON table (...)`.
    pub columns: &'static str,
    pub unique: bool,
}

impl IndexSpec {
    pub fn ddl(&self) -> String {
        format!(
            "CREATE {}INDEX IF NOT EXISTS {} ON {} ({})",
            if self.unique { "UNIQUE " } else { "" },
            self.name,
            self.table,
            self.columns
        )
    }
}

pub const INDEXES: &[IndexSpec] = &[
    IndexSpec {
        name: "idx_franchises_name",
        table: FRANCHISES_COLLECTION,
        columns: "name",
        unique: true,
    },
    IndexSpec {
        name: "idx_branches_franchise_id",
        table: BRANCHES_COLLECTION,
        columns: "franchise_id",
        unique: false,
    },
    IndexSpec {
        name: "idx_branches_franchise_id_name",
        table: BRANCHES_COLLECTION,
        columns: "franchise_id, name",
        unique: true,
    },
    IndexSpec {
        name: "idx_products_branch_id",
        table: PRODUCTS_COLLECTION,
        columns: "branch_id",
        unique: false,
    },
    IndexSpec {
        name: "idx_products_branch_id_name",
        table: PRODUCTS_COLLECTION,
        columns: "branch_id, name",
        unique: true,
    },
    IndexSpec {
        name: "idx_products_branch_id_stock",
        table: PRODUCTS_COLLECTION,
        columns: "branch_id, stock DESC",
        unique: false,
    },
];

/// Creates the three tables and their indexes when missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for ddl in TABLES {
        sqlx::query(ddl).execute(pool).await.map_err(|e| {
            error!("Failed to create table: {}", e);
            e
        })?;
    }

    for index in INDEXES {
        sqlx::query(&index.ddl()).execute(pool).await.map_err(|e| {
            error!("Failed to create index {}: {}", index.name, e);
            e
        })?;
    }

    info!("Database schema ready ({} tables, {} indexes)", TABLES.len(), INDEXES.len());
    Ok(())
}
