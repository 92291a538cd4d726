//! Repository traits (ports)

pub mod documents;
pub mod franchise_repository;
pub mod branch_repository;
pub mod product_repository;

pub use documents::{BranchDocument, FranchiseDocument, ProductDocument};
pub use franchise_repository::FranchiseRepository;
pub use branch_repository::BranchRepository;
pub use product_repository::ProductRepository;

#[cfg(test)]
pub use franchise_repository::MockFranchiseRepository;
#[cfg(test)]
pub use branch_repository::MockBranchRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
