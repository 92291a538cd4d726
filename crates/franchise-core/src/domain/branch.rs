//! Branch domain entity

use chrono::{DateTime, Utc};
use franchise_shared::EntityId;
use serde::{Deserialize, Serialize};

/// A branch owned by a franchise. `name` is unique within `franchise_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: EntityId,
    pub franchise_id: EntityId,
    pub name: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
