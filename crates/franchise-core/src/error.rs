//! Domain errors

use thiserror::Error;

/// Failure kinds surfaced by the gateway.
///
/// Blank input, negative stock, and missing records all map to `InvalidInput`;
/// only the message tells them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    StorageUnavailable(String),
}

impl DomainError {
    /// `"<field> must not be empty"`
    pub fn blank(field: &str) -> Self {
        DomainError::InvalidInput(format!("{} must not be empty", field))
    }

    /// `"<entity> not found"`
    pub fn not_found(entity: &str) -> Self {
        DomainError::InvalidInput(format!("{} not found", entity))
    }

    pub fn negative_stock() -> Self {
        DomainError::InvalidInput("Stock must be >= 0".to_string())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::StorageUnavailable(message.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DomainError::InvalidInput(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, DomainError::Conflict(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(DomainError::blank("Branch id").to_string(), "Branch id must not be empty");
        assert_eq!(DomainError::not_found("Product").to_string(), "Product not found");
        assert_eq!(DomainError::negative_stock().to_string(), "Stock must be >= 0");
        assert_eq!(DomainError::storage("connection refused").to_string(), "connection refused");
    }

    #[test]
    fn test_kinds() {
        assert!(DomainError::not_found("Franchise").is_invalid_input());
        assert!(DomainError::conflict("Franchise name already exists").is_conflict());
        assert!(!DomainError::storage("down").is_conflict());
    }
}
