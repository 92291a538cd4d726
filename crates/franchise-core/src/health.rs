//! Database health port

use async_trait::async_trait;

use crate::error::DomainError;

/// Liveness probe against the store: counts the franchises collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DbHealthPort: Send + Sync {
    async fn count(&self) -> Result<u64, DomainError>;
}
