//! Franchise domain entity

use chrono::{DateTime, Utc};
use franchise_shared::EntityId;
use serde::{Deserialize, Serialize};

/// Root of the hierarchy. `name` is unique across all franchises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Franchise {
    pub id: EntityId,
    pub name: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
