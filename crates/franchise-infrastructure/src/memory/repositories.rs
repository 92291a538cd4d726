// ============================================================================
// Franchise Infrastructure - In-Memory Repositories
// File: crates/franchise-infrastructure/src/memory/repositories.rs
// ============================================================================

use async_trait::async_trait;
use tracing::debug;

use franchise_core::error::DomainError;
use franchise_core::health::DbHealthPort;
use franchise_core::repositories::{
    BranchDocument, BranchRepository, FranchiseDocument, FranchiseRepository, ProductDocument,
    ProductRepository,
};
use franchise_core::services::franchise_service::{BRANCH_NAME_TAKEN, FRANCHISE_NAME_TAKEN, PRODUCT_NAME_TAKEN};

use super::collection::Collection;

pub struct MemoryFranchiseRepository {
    franchises: Collection<FranchiseDocument>,
}

impl Default for MemoryFranchiseRepository {
    fn default() -> Self {
        Self {
            franchises: Collection::new(FRANCHISE_NAME_TAKEN),
        }
    }
}

#[async_trait]
impl FranchiseRepository for MemoryFranchiseRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<FranchiseDocument>, DomainError> {
        Ok(self.franchises.find_by_id(id))
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.franchises.any(|f| f.id.as_deref() == Some(id)))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.franchises.any(|f| f.name == name))
    }

    async fn save(&self, franchise: &FranchiseDocument) -> Result<FranchiseDocument, DomainError> {
        let saved = self.franchises.upsert(franchise)?;
        debug!("Stored franchise {:?}", saved.id);
        Ok(saved)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError> {
        self.franchises.remove(id);
        Ok(())
    }
}

#[async_trait]
impl DbHealthPort for MemoryFranchiseRepository {
    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.franchises.len() as u64)
    }
}

pub struct MemoryBranchRepository {
    branches: Collection<BranchDocument>,
}

impl Default for MemoryBranchRepository {
    fn default() -> Self {
        Self {
            branches: Collection::new(BRANCH_NAME_TAKEN),
        }
    }
}

#[async_trait]
impl BranchRepository for MemoryBranchRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<BranchDocument>, DomainError> {
        Ok(self.branches.find_by_id(id))
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.branches.any(|b| b.id.as_deref() == Some(id)))
    }

    async fn exists_by_franchise_id_and_name(&self, franchise_id: &str, name: &str) -> Result<bool, DomainError> {
        Ok(self
            .branches
            .any(|b| b.franchise_id == franchise_id && b.name == name))
    }

    async fn find_all_by_franchise_id(&self, franchise_id: &str) -> Result<Vec<BranchDocument>, DomainError> {
        Ok(self.branches.filter(|b| b.franchise_id == franchise_id))
    }

    async fn save(&self, branch: &BranchDocument) -> Result<BranchDocument, DomainError> {
        let saved = self.branches.upsert(branch)?;
        debug!("Stored branch {:?}", saved.id);
        Ok(saved)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError> {
        self.branches.remove(id);
        Ok(())
    }
}

pub struct MemoryProductRepository {
    products: Collection<ProductDocument>,
}

impl Default for MemoryProductRepository {
    fn default() -> Self {
        Self {
            products: Collection::new(PRODUCT_NAME_TAKEN),
        }
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<ProductDocument>, DomainError> {
        Ok(self.products.find_by_id(id))
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.products.any(|p| p.id.as_deref() == Some(id)))
    }

    async fn exists_by_branch_id_and_name(&self, branch_id: &str, name: &str) -> Result<bool, DomainError> {
        Ok(self
            .products
            .any(|p| p.branch_id == branch_id && p.name == name))
    }

    async fn find_all_by_branch_id(&self, branch_id: &str) -> Result<Vec<ProductDocument>, DomainError> {
        Ok(self.products.filter(|p| p.branch_id == branch_id))
    }

    async fn find_top_by_branch_id_order_by_stock_desc(
        &self,
        branch_id: &str,
    ) -> Result<Option<ProductDocument>, DomainError> {
        // Highest stock, ties broken by the smallest id.
        Ok(self
            .products
            .filter(|p| p.branch_id == branch_id)
            .into_iter()
            .min_by(|a, b| b.stock.cmp(&a.stock).then_with(|| a.id.cmp(&b.id))))
    }

    async fn save(&self, product: &ProductDocument) -> Result<ProductDocument, DomainError> {
        let saved = self.products.upsert(product)?;
        debug!("Stored product {:?}", saved.id);
        Ok(saved)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError> {
        self.products.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_top_product_prefers_stock_then_id() {
        let repo = MemoryProductRepository::default();
        let now = Utc::now();

        for (id, name, stock) in [("p-2", "B", 30), ("p-3", "C", 50), ("p-1", "A", 50)] {
            let doc = ProductDocument {
                id: Some(id.to_string()),
                ..ProductDocument::new("br-1", name, stock, now)
            };
            repo.save(&doc).await.unwrap();
        }

        let top = repo.find_top_by_branch_id_order_by_stock_desc("br-1").await.unwrap().unwrap();
        assert_eq!(top.id.as_deref(), Some("p-1"));
        assert!(repo.find_top_by_branch_id_order_by_stock_desc("br-9").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_franchise_name_on_save_is_conflict() {
        let repo = MemoryFranchiseRepository::default();
        let now = Utc::now();

        repo.save(&FranchiseDocument::new("KFC", now)).await.unwrap();
        let err = repo.save(&FranchiseDocument::new("KFC", now)).await.unwrap_err();

        assert_eq!(err, DomainError::Conflict(FRANCHISE_NAME_TAKEN.to_string()));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_branches_listed_in_insertion_order() {
        let repo = MemoryBranchRepository::default();
        let now = Utc::now();

        for name in ["Norte", "Centro", "Sur"] {
            repo.save(&BranchDocument::new("f-1", name, now)).await.unwrap();
        }
        repo.save(&BranchDocument::new("f-2", "Centro", now)).await.unwrap();

        let names: Vec<String> = repo
            .find_all_by_franchise_id("f-1")
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Norte", "Centro", "Sur"]);
        assert!(repo.exists_by_franchise_id_and_name("f-2", "Centro").await.unwrap());
        assert!(!repo.exists_by_franchise_id_and_name("f-2", "Sur").await.unwrap());
    }
}
