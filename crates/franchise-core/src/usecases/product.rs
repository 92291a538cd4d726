//! Product use cases

use std::sync::Arc;

use crate::domain::Product;
use crate::error::DomainError;
use crate::gateway::FranchiseGateway;

#[derive(Clone)]
pub struct AddProductUseCase {
    gateway: Arc<dyn FranchiseGateway>,
}

impl AddProductUseCase {
    pub fn new(gateway: Arc<dyn FranchiseGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, branch_id: &str, product_name: &str, stock: i32) -> Result<Product, DomainError> {
        self.gateway.add_product(branch_id, product_name, stock).await
    }
}

#[derive(Clone)]
pub struct DeleteProductUseCase {
    gateway: Arc<dyn FranchiseGateway>,
}

impl DeleteProductUseCase {
    pub fn new(gateway: Arc<dyn FranchiseGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, product_id: &str) -> Result<(), DomainError> {
        self.gateway.delete_product(product_id).await
    }
}

#[derive(Clone)]
pub struct UpdateProductStockUseCase {
    gateway: Arc<dyn FranchiseGateway>,
}

impl UpdateProductStockUseCase {
    pub fn new(gateway: Arc<dyn FranchiseGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, product_id: &str, new_stock: i32) -> Result<Product, DomainError> {
        self.gateway.update_product_stock(product_id, new_stock).await
    }
}

#[derive(Clone)]
pub struct UpdateProductNameUseCase {
    gateway: Arc<dyn FranchiseGateway>,
}

impl UpdateProductNameUseCase {
    pub fn new(gateway: Arc<dyn FranchiseGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, product_id: &str, new_name: &str) -> Result<Product, DomainError> {
        self.gateway.update_product_name(product_id, new_name).await
    }
}
