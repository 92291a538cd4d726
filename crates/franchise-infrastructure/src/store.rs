// ============================================================================
// Franchise Infrastructure - Store Factory
// File: crates/franchise-infrastructure/src/store.rs
// Description: Selects the storage adapter from `database.provider`
// ============================================================================

use std::sync::Arc;

use tracing::info;

use franchise_core::{DbHealthPort, FranchiseGateway, FranchiseService};
use franchise_shared::config::{DatabaseProvider, DatabaseSettings};
use franchise_shared::AppError;

use crate::database::{create_pool, ensure_schema, PgBranchRepository, PgFranchiseRepository, PgProductRepository};
use crate::memory::MemoryStore;

/// The gateway and health probe over one storage backend.
#[derive(Clone)]
pub struct Store {
    pub gateway: Arc<dyn FranchiseGateway>,
    pub health: Arc<dyn DbHealthPort>,
}

impl Store {
    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        let gateway = FranchiseService::new(store.franchises.clone(), store.branches, store.products);

        Self {
            gateway: Arc::new(gateway),
            health: store.franchises,
        }
    }
}

pub async fn build_store(settings: &DatabaseSettings) -> Result<Store, AppError> {
    match settings.provider()? {
        DatabaseProvider::Postgres => {
            let pool = create_pool(settings)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            ensure_schema(&pool)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            let franchises = Arc::new(PgFranchiseRepository::new(pool.clone()));
            let branches = Arc::new(PgBranchRepository::new(pool.clone()));
            let products = Arc::new(PgProductRepository::new(pool));

            info!("Using PostgreSQL store");
            Ok(Store {
                gateway: Arc::new(FranchiseService::new(franchises.clone(), branches, products)),
                health: franchises,
            })
        }
        DatabaseProvider::Memory => {
            info!("Using in-memory store");
            Ok(Store::in_memory())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use franchise_core::DomainError;
    use futures::TryStreamExt;

    fn settings(provider: &str) -> DatabaseSettings {
        DatabaseSettings {
            provider: provider.to_string(),
            url: String::new(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout_secs: 1,
        }
    }

    #[tokio::test]
    async fn test_build_memory_store() {
        let store = build_store(&settings("memory")).await.unwrap();
        assert_eq!(store.health.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_provider_rejected() {
        let result = build_store(&settings("mongodb")).await;
        assert!(matches!(result, Err(AppError::UnsupportedProvider(_))));
    }

    #[tokio::test]
    async fn test_top_products_scenario() {
        let store = Store::in_memory();
        let gateway = store.gateway.as_ref();

        let kfc = gateway.create_franchise("KFC").await.unwrap();
        let centro = gateway.add_branch(&kfc.id, "Centro").await.unwrap();
        let norte = gateway.add_branch(&kfc.id, "Norte").await.unwrap();
        gateway.add_product(&centro.id, "Burger", 50).await.unwrap();
        gateway.add_product(&centro.id, "Fries", 30).await.unwrap();

        let entries: Vec<_> = gateway.top_product_by_branch(&kfc.id).try_collect().await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].branch_id, centro.id);
        assert_eq!(entries[0].branch_name, "Centro");
        assert_eq!(entries[0].product_name(), Some("Burger"));
        assert_eq!(entries[0].stock(), 50);
        assert_eq!(entries[1].branch_id, norte.id);
        assert!(entries[1].product_id().is_none());
        assert_eq!(entries[1].stock(), 0);

        assert_eq!(store.health.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicates_and_scopes() {
        let store = Store::in_memory();
        let gateway = store.gateway.as_ref();

        let kfc = gateway.create_franchise("KFC").await.unwrap();
        let err = gateway.create_franchise("  KFC ").await.unwrap_err();
        assert_eq!(err, DomainError::Conflict("Franchise name already exists".to_string()));

        let other = gateway.create_franchise("Subway").await.unwrap();
        gateway.add_branch(&kfc.id, "Centro").await.unwrap();
        // Same branch name is fine under a different franchise.
        gateway.add_branch(&other.id, "Centro").await.unwrap();
        let err = gateway.add_branch(&kfc.id, "Centro").await.unwrap_err();
        assert!(err.is_conflict());

        let err = gateway.add_branch("missing", "Centro").await.unwrap_err();
        assert_eq!(err.to_string(), "Franchise not found");
    }

    #[tokio::test]
    async fn test_product_lifecycle() {
        let store = Store::in_memory();
        let gateway = store.gateway.as_ref();

        let franchise = gateway.create_franchise("ACME").await.unwrap();
        let branch = gateway.add_branch(&franchise.id, "Centro").await.unwrap();
        let product = gateway.add_product(&branch.id, "Burger", 10).await.unwrap();

        let updated = gateway.update_product_stock(&product.id, 99).await.unwrap();
        assert_eq!(updated.stock, 99);
        assert_eq!(updated.created_at, product.created_at);

        let renamed = gateway.update_product_name(&product.id, "Whopper").await.unwrap();
        assert_eq!(renamed.name, "Whopper");
        assert_eq!(renamed.stock, 99);

        // Renaming to the current name succeeds.
        let same = gateway.update_product_name(&product.id, "Whopper").await.unwrap();
        assert_eq!(same.id, product.id);

        gateway.delete_product(&product.id).await.unwrap();
        let err = gateway.delete_product(&product.id).await.unwrap_err();
        assert_eq!(err.to_string(), "Product not found");

        let err = gateway.update_product_stock(&product.id, 1).await.unwrap_err();
        assert_eq!(err.to_string(), "Product not found");
    }

    #[tokio::test]
    async fn test_renames_respect_scope() {
        let store = Store::in_memory();
        let gateway = store.gateway.as_ref();

        let franchise = gateway.create_franchise("OLD").await.unwrap();
        gateway.create_franchise("TAKEN").await.unwrap();

        let err = gateway.update_franchise_name(&franchise.id, "TAKEN").await.unwrap_err();
        assert!(err.is_conflict());

        let renamed = gateway.update_franchise_name(&franchise.id, " NEW ").await.unwrap();
        assert_eq!(renamed.name, "NEW");
        assert_eq!(gateway.update_franchise_name(&franchise.id, "NEW").await.unwrap().name, "NEW");

        let a = gateway.add_branch(&franchise.id, "A").await.unwrap();
        gateway.add_branch(&franchise.id, "B").await.unwrap();
        assert!(gateway.update_branch_name(&a.id, "B").await.unwrap_err().is_conflict());
        assert_eq!(gateway.update_branch_name(&a.id, "C").await.unwrap().name, "C");
    }

    #[tokio::test]
    async fn test_top_products_unknown_franchise() {
        let store = Store::in_memory();
        let result: Result<Vec<_>, _> = store.gateway.top_product_by_branch("nope").try_collect().await;

        assert_eq!(result.unwrap_err(), DomainError::InvalidInput("Franchise not found".to_string()));
    }
}
