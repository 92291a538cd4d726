//! Product repository trait (port)

use async_trait::async_trait;

use super::documents::ProductDocument;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<ProductDocument>, DomainError>;
    async fn exists_by_id(&self, id: &str) -> Result<bool, DomainError>;
    async fn exists_by_branch_id_and_name(
        &self,
        branch_id: &str,
        name: &str,
    ) -> Result<bool, DomainError>;
    async fn find_all_by_branch_id(&self, branch_id: &str) -> Result<Vec<ProductDocument>, DomainError>;

    /// The product with the highest stock in the branch. Ties resolve the same
    /// way on every call for a given store state.
    async fn find_top_by_branch_id_order_by_stock_desc(
        &self,
        branch_id: &str,
    ) -> Result<Option<ProductDocument>, DomainError>;

    async fn save(&self, product: &ProductDocument) -> Result<ProductDocument, DomainError>;
    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError>;
}
