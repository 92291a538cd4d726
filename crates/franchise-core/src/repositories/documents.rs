// ============================================================================
// Franchise Core - Storage Records
// File: crates/franchise-core/src/repositories/documents.rs
// Description: Records exchanged with the store; `id` is None until first save
// ============================================================================

use chrono::{DateTime, Utc};
use franchise_shared::EntityId;

use crate::domain::{Branch, Franchise, Product, TopProduct};
use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FranchiseDocument {
    pub id: Option<EntityId>,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchDocument {
    pub id: Option<EntityId>,
    pub franchise_id: EntityId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDocument {
    pub id: Option<EntityId>,
    pub branch_id: EntityId,
    pub name: String,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FranchiseDocument {
    pub fn new(name: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replacement keeping `id` and `created_at`.
    pub fn renamed(&self, name: &str, now: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            updated_at: now,
            ..self.clone()
        }
    }
}

impl BranchDocument {
    pub fn new(franchise_id: &str, name: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            franchise_id: franchise_id.to_string(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn renamed(&self, name: &str, now: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            updated_at: now,
            ..self.clone()
        }
    }
}

impl ProductDocument {
    pub fn new(branch_id: &str, name: &str, stock: i32, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            branch_id: branch_id.to_string(),
            name: name.to_string(),
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn renamed(&self, name: &str, now: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            updated_at: now,
            ..self.clone()
        }
    }

    pub fn with_stock(&self, stock: i32, now: DateTime<Utc>) -> Self {
        Self {
            stock,
            updated_at: now,
            ..self.clone()
        }
    }
}

fn persisted_id(id: Option<EntityId>, collection: &str) -> Result<EntityId, DomainError> {
    id.ok_or_else(|| DomainError::storage(format!("{} record has no id", collection)))
}

impl TryFrom<FranchiseDocument> for Franchise {
    type Error = DomainError;

    fn try_from(doc: FranchiseDocument) -> Result<Self, Self::Error> {
        Ok(Franchise {
            id: persisted_id(doc.id, "franchises")?,
            name: doc.name,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}

impl TryFrom<BranchDocument> for Branch {
    type Error = DomainError;

    fn try_from(doc: BranchDocument) -> Result<Self, Self::Error> {
        Ok(Branch {
            id: persisted_id(doc.id, "branches")?,
            franchise_id: doc.franchise_id,
            name: doc.name,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}

impl TryFrom<ProductDocument> for Product {
    type Error = DomainError;

    fn try_from(doc: ProductDocument) -> Result<Self, Self::Error> {
        Ok(Product {
            id: persisted_id(doc.id, "products")?,
            branch_id: doc.branch_id,
            name: doc.name,
            stock: doc.stock,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}

impl TryFrom<ProductDocument> for TopProduct {
    type Error = DomainError;

    fn try_from(doc: ProductDocument) -> Result<Self, Self::Error> {
        Ok(TopProduct {
            id: persisted_id(doc.id, "products")?,
            name: doc.name,
            stock: doc.stock,
        })
    }
}
