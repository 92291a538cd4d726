//! # Franchise Shared
//! 
//! Configuration, telemetry, and common types shared by the franchise crates.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
