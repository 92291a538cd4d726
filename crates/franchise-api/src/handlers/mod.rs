//! HTTP handlers

pub mod branch;
pub mod franchise;
pub mod health;
pub mod product;
