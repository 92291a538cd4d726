// ============================================================================
// Franchise Core - Product Entity
// File: crates/franchise-core/src/domain/product.rs
// Description: Stocked product owned by a branch
// ============================================================================

use chrono::{DateTime, Utc};
use franchise_shared::EntityId;
use serde::{Deserialize, Serialize};

/// Product entity. `name` is unique within `branch_id` and `stock` is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub branch_id: EntityId,
    pub name: String,
    pub stock: i32,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
