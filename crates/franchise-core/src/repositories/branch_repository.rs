//! Branch repository trait (port)

use async_trait::async_trait;

use super::documents::BranchDocument;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BranchRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<BranchDocument>, DomainError>;
    async fn exists_by_id(&self, id: &str) -> Result<bool, DomainError>;
    async fn exists_by_franchise_id_and_name(
        &self,
        franchise_id: &str,
        name: &str,
    ) -> Result<bool, DomainError>;

    /// Branches of a franchise in the store's natural order.
    async fn find_all_by_franchise_id(
        &self,
        franchise_id: &str,
    ) -> Result<Vec<BranchDocument>, DomainError>;

    async fn save(&self, branch: &BranchDocument) -> Result<BranchDocument, DomainError>;
    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError>;
}
