//! Use cases
//!
//! One thin wrapper per entry-point operation. Each delegates to the gateway with
//! its inputs unchanged, so blank or malformed values reach the gateway's own
//! validation.

pub mod branch;
pub mod franchise;
pub mod health;
pub mod product;

use std::sync::Arc;

use crate::gateway::FranchiseGateway;

pub use branch::{AddBranchUseCase, UpdateBranchNameUseCase};
pub use franchise::{CreateFranchiseUseCase, TopProductByBranchUseCase, UpdateFranchiseNameUseCase};
pub use health::{DbHealth, DbHealthUseCase};
pub use product::{
    AddProductUseCase, DeleteProductUseCase, UpdateProductNameUseCase, UpdateProductStockUseCase,
};

/// Every gateway use case, wired to one shared gateway.
#[derive(Clone)]
pub struct UseCases {
    pub create_franchise: CreateFranchiseUseCase,
    pub add_branch: AddBranchUseCase,
    pub add_product: AddProductUseCase,
    pub delete_product: DeleteProductUseCase,
    pub update_product_stock: UpdateProductStockUseCase,
    pub top_product_by_branch: TopProductByBranchUseCase,
    pub update_franchise_name: UpdateFranchiseNameUseCase,
    pub update_branch_name: UpdateBranchNameUseCase,
    pub update_product_name: UpdateProductNameUseCase,
}

impl UseCases {
    pub fn new(gateway: Arc<dyn FranchiseGateway>) -> Self {
        Self {
            create_franchise: CreateFranchiseUseCase::new(gateway.clone()),
            add_branch: AddBranchUseCase::new(gateway.clone()),
            add_product: AddProductUseCase::new(gateway.clone()),
            delete_product: DeleteProductUseCase::new(gateway.clone()),
            update_product_stock: UpdateProductStockUseCase::new(gateway.clone()),
            top_product_by_branch: TopProductByBranchUseCase::new(gateway.clone()),
            update_franchise_name: UpdateFranchiseNameUseCase::new(gateway.clone()),
            update_branch_name: UpdateBranchNameUseCase::new(gateway.clone()),
            update_product_name: UpdateProductNameUseCase::new(gateway),
        }
    }
}
