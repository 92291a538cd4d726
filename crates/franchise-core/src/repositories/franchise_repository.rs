//! Franchise repository trait (port)

use async_trait::async_trait;

use super::documents::FranchiseDocument;
use crate::error::DomainError;

/// Access to the `franchises` collection. Every method may fail with
/// [`DomainError::StorageUnavailable`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FranchiseRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<FranchiseDocument>, DomainError>;
    async fn exists_by_id(&self, id: &str) -> Result<bool, DomainError>;
    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError>;

    /// Inserts when `id` is `None`, otherwise replaces the whole record.
    async fn save(&self, franchise: &FranchiseDocument) -> Result<FranchiseDocument, DomainError>;
    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError>;
}
