// ============================================================================
// Franchise Core - Franchise Service
// File: crates/franchise-core/src/services/franchise_service.rs
// ============================================================================
//! Store-backed implementation of [`FranchiseGateway`].
//!
//! Every operation follows the same order: reject blank or negative input, confirm
//! the referenced record exists, check name uniqueness in its scope, persist, map to
//! the domain entity. Check and save are separate round trips; the store's unique
//! indexes catch the duplicates that slip through between them.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use futures::stream;
use tracing::{debug, info, warn};

use franchise_shared::utils::non_blank;

use crate::domain::{Branch, Franchise, Product, TopProduct, TopProductByBranch};
use crate::error::DomainError;
use crate::gateway::{FranchiseGateway, TopProductStream};
use crate::repositories::{
    BranchDocument, BranchRepository, FranchiseDocument, FranchiseRepository, ProductDocument,
    ProductRepository,
};

pub const FRANCHISE_NAME_TAKEN: &str = "Franchise name already exists";
pub const BRANCH_NAME_TAKEN: &str = "Branch name already exists for this franchise";
pub const PRODUCT_NAME_TAKEN: &str = "Product name already exists for this branch";

/// Gateway over the three collection repositories
pub struct FranchiseService<F, B, P>
where
    F: FranchiseRepository,
    B: BranchRepository,
    P: ProductRepository,
{
    franchise_repo: Arc<F>,
    branch_repo: Arc<B>,
    product_repo: Arc<P>,
}

impl<F, B, P> FranchiseService<F, B, P>
where
    F: FranchiseRepository,
    B: BranchRepository,
    P: ProductRepository,
{
    pub fn new(franchise_repo: Arc<F>, branch_repo: Arc<B>, product_repo: Arc<P>) -> Self {
        Self {
            franchise_repo,
            branch_repo,
            product_repo,
        }
    }
}

/// Trimmed `value`, or `"<field> must not be empty"`.
fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, DomainError> {
    non_blank(Some(value)).ok_or_else(|| DomainError::blank(field))
}

fn ensure_stock(stock: i32) -> Result<(), DomainError> {
    if stock < 0 {
        return Err(DomainError::negative_stock());
    }
    Ok(())
}

fn ensure_found(exists: bool, entity: &str) -> Result<(), DomainError> {
    if !exists {
        warn!("{} not found", entity);
        return Err(DomainError::not_found(entity));
    }
    Ok(())
}

async fn top_product_entry<P: ProductRepository>(
    product_repo: &P,
    branch: BranchDocument,
) -> Result<TopProductByBranch, DomainError> {
    let branch_id = branch
        .id
        .ok_or_else(|| DomainError::storage("branches record has no id"))?;

    let product = product_repo
        .find_top_by_branch_id_order_by_stock_desc(&branch_id)
        .await?
        .map(TopProduct::try_from)
        .transpose()?;

    Ok(TopProductByBranch::new(branch_id, branch.name, product))
}

#[async_trait]
impl<F, B, P> FranchiseGateway for FranchiseService<F, B, P>
where
    F: FranchiseRepository + 'static,
    B: BranchRepository + 'static,
    P: ProductRepository + 'static,
{
    async fn create_franchise(&self, name: &str) -> Result<Franchise, DomainError> {
        let name = required(name, "Franchise name")?;
        info!("Creating franchise: {}", name);

        if self.franchise_repo.exists_by_name(name).await? {
            warn!("Create franchise failed: name already exists: {}", name);
            return Err(DomainError::conflict(FRANCHISE_NAME_TAKEN));
        }

        let saved = self
            .franchise_repo
            .save(&FranchiseDocument::new(name, Utc::now()))
            .await?;
        let franchise = Franchise::try_from(saved)?;

        info!("Franchise created: {}", franchise.id);
        Ok(franchise)
    }

    async fn add_branch(&self, franchise_id: &str, branch_name: &str) -> Result<Branch, DomainError> {
        let franchise_id = required(franchise_id, "Franchise id")?;
        let name = required(branch_name, "Branch name")?;
        info!("Adding branch {} to franchise {}", name, franchise_id);

        ensure_found(self.franchise_repo.exists_by_id(franchise_id).await?, "Franchise")?;

        if self
            .branch_repo
            .exists_by_franchise_id_and_name(franchise_id, name)
            .await?
        {
            warn!("Add branch failed: {} already exists in franchise {}", name, franchise_id);
            return Err(DomainError::conflict(BRANCH_NAME_TAKEN));
        }

        let saved = self
            .branch_repo
            .save(&BranchDocument::new(franchise_id, name, Utc::now()))
            .await?;

        Branch::try_from(saved)
    }

    async fn add_product(
        &self,
        branch_id: &str,
        product_name: &str,
        stock: i32,
    ) -> Result<Product, DomainError> {
        let branch_id = required(branch_id, "Branch id")?;
        let name = required(product_name, "Product name")?;
        ensure_stock(stock)?;
        info!("Adding product {} (stock {}) to branch {}", name, stock, branch_id);

        ensure_found(self.branch_repo.exists_by_id(branch_id).await?, "Branch")?;

        if self
            .product_repo
            .exists_by_branch_id_and_name(branch_id, name)
            .await?
        {
            warn!("Add product failed: {} already exists in branch {}", name, branch_id);
            return Err(DomainError::conflict(PRODUCT_NAME_TAKEN));
        }

        let saved = self
            .product_repo
            .save(&ProductDocument::new(branch_id, name, stock, Utc::now()))
            .await?;

        Product::try_from(saved)
    }

    async fn delete_product(&self, product_id: &str) -> Result<(), DomainError> {
        let product_id = required(product_id, "Product id")?;

        ensure_found(self.product_repo.exists_by_id(product_id).await?, "Product")?;
        self.product_repo.delete_by_id(product_id).await?;

        info!("Product deleted: {}", product_id);
        Ok(())
    }

    async fn update_product_stock(&self, product_id: &str, new_stock: i32) -> Result<Product, DomainError> {
        let product_id = required(product_id, "Product id")?;
        ensure_stock(new_stock)?;

        let existing = self
            .product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product"))?;

        let saved = self
            .product_repo
            .save(&existing.with_stock(new_stock, Utc::now()))
            .await?;

        debug!("Stock of product {} set to {}", product_id, new_stock);
        Product::try_from(saved)
    }

    fn top_product_by_branch(&self, franchise_id: &str) -> TopProductStream {
        let franchise_id = match required(franchise_id, "Franchise id") {
            Ok(id) => id.to_string(),
            Err(e) => return Box::pin(stream::once(async move { Err(e) })),
        };

        let franchise_repo = Arc::clone(&self.franchise_repo);
        let branch_repo = Arc::clone(&self.branch_repo);
        let product_repo = Arc::clone(&self.product_repo);

        let stream = async_stream::try_stream! {
            ensure_found(franchise_repo.exists_by_id(&franchise_id).await?, "Franchise")?;

            let branches = branch_repo.find_all_by_franchise_id(&franchise_id).await?;
            debug!("Resolving top products for {} branches of franchise {}", branches.len(), franchise_id);

            for branch in branches {
                let entry = top_product_entry(product_repo.as_ref(), branch).await?;
                yield entry;
            }
        };

        Box::pin(stream)
    }

    async fn update_franchise_name(&self, franchise_id: &str, new_name: &str) -> Result<Franchise, DomainError> {
        let franchise_id = required(franchise_id, "Franchise id")?;
        let name = required(new_name, "New franchise name")?;

        let existing = self
            .franchise_repo
            .find_by_id(franchise_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Franchise"))?;

        // Resubmitting the current name is not a conflict, but the record is still re-saved.
        let duplicate = self.franchise_repo.exists_by_name(name).await?;
        if duplicate && existing.name != name {
            warn!("Rename franchise {} failed: {} already exists", franchise_id, name);
            return Err(DomainError::conflict(FRANCHISE_NAME_TAKEN));
        }

        let saved = self
            .franchise_repo
            .save(&existing.renamed(name, Utc::now()))
            .await?;

        info!("Franchise {} renamed to {}", franchise_id, name);
        Franchise::try_from(saved)
    }

    async fn update_branch_name(&self, branch_id: &str, new_name: &str) -> Result<Branch, DomainError> {
        let branch_id = required(branch_id, "Branch id")?;
        let name = required(new_name, "New branch name")?;

        let existing = self
            .branch_repo
            .find_by_id(branch_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Branch"))?;

        let duplicate = self
            .branch_repo
            .exists_by_franchise_id_and_name(&existing.franchise_id, name)
            .await?;
        if duplicate && existing.name != name {
            warn!("Rename branch {} failed: {} already exists", branch_id, name);
            return Err(DomainError::conflict(BRANCH_NAME_TAKEN));
        }

        let saved = self
            .branch_repo
            .save(&existing.renamed(name, Utc::now()))
            .await?;

        info!("Branch {} renamed to {}", branch_id, name);
        Branch::try_from(saved)
    }

    async fn update_product_name(&self, product_id: &str, new_name: &str) -> Result<Product, DomainError> {
        let product_id = required(product_id, "Product id")?;
        let name = required(new_name, "New product name")?;

        let existing = self
            .product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product"))?;

        let duplicate = self
            .product_repo
            .exists_by_branch_id_and_name(&existing.branch_id, name)
            .await?;
        if duplicate && existing.name != name {
            warn!("Rename product {} failed: {} already exists", product_id, name);
            return Err(DomainError::conflict(PRODUCT_NAME_TAKEN));
        }

        let saved = self
            .product_repo
            .save(&existing.renamed(name, Utc::now()))
            .await?;

        info!("Product {} renamed to {}", product_id, name);
        Product::try_from(saved)
    }
}
