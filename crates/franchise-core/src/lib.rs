//! # Franchise Core
//! 
//! Domain entities, repository traits, the franchise gateway, and use cases.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod gateway;
pub mod health;
pub mod services;
pub mod usecases;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use gateway::{FranchiseGateway, TopProductStream};
pub use health::DbHealthPort;
pub use services::FranchiseService;
pub use usecases::UseCases;
