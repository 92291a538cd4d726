//! PostgreSQL repository implementations

pub mod branch_repo_impl;
pub mod franchise_repo_impl;
pub mod product_repo_impl;

pub use branch_repo_impl::PgBranchRepository;
pub use franchise_repo_impl::PgFranchiseRepository;
pub use product_repo_impl::PgProductRepository;

use tracing::{error, warn};

use franchise_core::error::DomainError;

pub(crate) fn storage_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::storage(e.to_string())
}

/// Unique index violations become `Conflict(taken)`; anything else is a storage failure.
pub(crate) fn save_error(context: &str, e: sqlx::Error, taken: &str) -> DomainError {
    let unique = e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());

    if unique {
        warn!("Unique index violation {}: {}", context, e);
        DomainError::conflict(taken)
    } else {
        storage_error(context, e)
    }
}
