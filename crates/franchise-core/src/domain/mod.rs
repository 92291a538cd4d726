//! # Franchise Core - Domain Module
//! 
//! Immutable value records returned by the gateway.

pub mod franchise;
pub mod branch;
pub mod product;
pub mod top_product;

pub use franchise::Franchise;
pub use branch::Branch;
pub use product::Product;
pub use top_product::{TopProduct, TopProductByBranch};
