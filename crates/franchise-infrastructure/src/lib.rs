//! # Franchise Infrastructure
//!
//! Storage adapters for the repository ports: PostgreSQL and in-memory.

pub mod database;
pub mod memory;
pub mod store;

pub use database::{create_pool, ensure_schema, PgBranchRepository, PgFranchiseRepository, PgProductRepository};
pub use memory::{MemoryBranchRepository, MemoryFranchiseRepository, MemoryProductRepository, MemoryStore};
pub use store::{build_store, Store};
