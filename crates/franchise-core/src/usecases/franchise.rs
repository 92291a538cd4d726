//! Franchise use cases

use std::sync::Arc;

use crate::domain::Franchise;
use crate::error::DomainError;
use crate::gateway::{FranchiseGateway, TopProductStream};

#[derive(Clone)]
pub struct CreateFranchiseUseCase {
    gateway: Arc<dyn FranchiseGateway>,
}

impl CreateFranchiseUseCase {
    pub fn new(gateway: Arc<dyn FranchiseGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, name: &str) -> Result<Franchise, DomainError> {
        self.gateway.create_franchise(name).await
    }
}

#[derive(Clone)]
pub struct UpdateFranchiseNameUseCase {
    gateway: Arc<dyn FranchiseGateway>,
}

impl UpdateFranchiseNameUseCase {
    pub fn new(gateway: Arc<dyn FranchiseGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, franchise_id: &str, new_name: &str) -> Result<Franchise, DomainError> {
        self.gateway.update_franchise_name(franchise_id, new_name).await
    }
}

/// Highest-stock product of every branch of a franchise, one item per branch.
#[derive(Clone)]
pub struct TopProductByBranchUseCase {
    gateway: Arc<dyn FranchiseGateway>,
}

impl TopProductByBranchUseCase {
    pub fn new(gateway: Arc<dyn FranchiseGateway>) -> Self {
        Self { gateway }
    }

    pub fn execute(&self, franchise_id: &str) -> TopProductStream {
        self.gateway.top_product_by_branch(franchise_id)
    }
}
