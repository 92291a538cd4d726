//! Franchise gateway (domain port)
//!
//! The nine operations the entry point can reach through the use cases. Implementations
//! validate input, check parents and name uniqueness, persist, and hand back domain
//! entities.

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::domain::{Branch, Franchise, Product, TopProductByBranch};
use crate::error::DomainError;

/// Lazy sequence of per-branch results. Errors (including input validation) are
/// delivered as the first item.
pub type TopProductStream =
    Pin<Box<dyn Stream<Item = Result<TopProductByBranch, DomainError>> + Send>>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FranchiseGateway: Send + Sync {
    async fn create_franchise(&self, name: &str) -> Result<Franchise, DomainError>;

    async fn add_branch(&self, franchise_id: &str, branch_name: &str) -> Result<Branch, DomainError>;

    async fn add_product(
        &self,
        branch_id: &str,
        product_name: &str,
        stock: i32,
    ) -> Result<Product, DomainError>;

    async fn delete_product(&self, product_id: &str) -> Result<(), DomainError>;

    async fn update_product_stock(&self, product_id: &str, new_stock: i32) -> Result<Product, DomainError>;

    fn top_product_by_branch(&self, franchise_id: &str) -> TopProductStream;

    async fn update_franchise_name(&self, franchise_id: &str, new_name: &str) -> Result<Franchise, DomainError>;

    async fn update_branch_name(&self, branch_id: &str, new_name: &str) -> Result<Branch, DomainError>;

    async fn update_product_name(&self, product_id: &str, new_name: &str) -> Result<Product, DomainError>;
}
