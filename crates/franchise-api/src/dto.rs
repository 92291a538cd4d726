//! Request payloads
//!
//! Fields are optional so a missing `name` reaches the gateway as blank and fails
//! its validation with the usual message.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct NameRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl NameRequest {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stock: Option<i32>,
}

impl CreateProductRequest {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Missing stock counts as 0.
    pub fn stock(&self) -> i32 {
        self.stock.unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateStockRequest {
    #[serde(default)]
    pub stock: Option<i32>,
}

impl UpdateStockRequest {
    pub fn stock(&self) -> i32 {
        self.stock.unwrap_or_default()
    }
}
