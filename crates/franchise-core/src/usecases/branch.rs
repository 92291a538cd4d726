//! Branch use cases

use std::sync::Arc;

use crate::domain::Branch;
use crate::error::DomainError;
use crate::gateway::FranchiseGateway;

#[derive(Clone)]
pub struct AddBranchUseCase {
    gateway: Arc<dyn FranchiseGateway>,
}

impl AddBranchUseCase {
    pub fn new(gateway: Arc<dyn FranchiseGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, franchise_id: &str, branch_name: &str) -> Result<Branch, DomainError> {
        self.gateway.add_branch(franchise_id, branch_name).await
    }
}

#[derive(Clone)]
pub struct UpdateBranchNameUseCase {
    gateway: Arc<dyn FranchiseGateway>,
}

impl UpdateBranchNameUseCase {
    pub fn new(gateway: Arc<dyn FranchiseGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, branch_id: &str, new_name: &str) -> Result<Branch, DomainError> {
        self.gateway.update_branch_name(branch_id, new_name).await
    }
}
