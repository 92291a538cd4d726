//! In-memory adapters
//!
//! Back the `memory` provider and the scenario tests. Each collection enforces the
//! same unique key as its PostgreSQL index.

mod collection;
pub mod repositories;

pub use repositories::{MemoryBranchRepository, MemoryFranchiseRepository, MemoryProductRepository};

use std::sync::Arc;

/// The three collections of one in-memory database.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub franchises: Arc<MemoryFranchiseRepository>,
    pub branches: Arc<MemoryBranchRepository>,
    pub products: Arc<MemoryProductRepository>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
