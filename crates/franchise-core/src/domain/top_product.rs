// ============================================================================
// Franchise Core - Top Product Projection
// File: crates/franchise-core/src/domain/top_product.rs
// Description: Highest-stock product of a branch, computed per query
// ============================================================================

use franchise_shared::EntityId;
use serde::{Serialize, Serializer};

/// The winning product of a branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopProduct {
    pub id: EntityId,
    pub name: String,
    pub stock: i32,
}

/// One entry per branch. `product` is `None` when the branch has no products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopProductByBranch {
    pub branch_id: EntityId,
    pub branch_name: String,
    pub product: Option<TopProduct>,
}

impl TopProductByBranch {
    pub fn new(branch_id: EntityId, branch_name: String, product: Option<TopProduct>) -> Self {
        Self { branch_id, branch_name, product }
    }

    pub fn product_id(&self) -> Option<&str> {
        self.product.as_ref().map(|p| p.id.as_str())
    }

    pub fn product_name(&self) -> Option<&str> {
        self.product.as_ref().map(|p| p.name.as_str())
    }

    /// Stock of the top product, 0 for an empty branch.
    pub fn stock(&self) -> i32 {
        self.product.as_ref().map_or(0, |p| p.stock)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TopProductByBranchBody<'a> {
    branch_id: &'a str,
    branch_name: &'a str,
    product_id: Option<&'a str>,
    product_name: Option<&'a str>,
    stock: i32,
}

// Flat wire shape: absent product fields serialize as null, stock as 0.
impl Serialize for TopProductByBranch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TopProductByBranchBody {
            branch_id: &self.branch_id,
            branch_name: &self.branch_name,
            product_id: self.product_id(),
            product_name: self.product_name(),
            stock: self.stock(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_branch_serializes_nulls() {
        let entry = TopProductByBranch::new("br-2".to_string(), "Norte".to_string(), None);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["branchId"], "br-2");
        assert_eq!(json["branchName"], "Norte");
        assert!(json["productId"].is_null());
        assert!(json["productName"].is_null());
        assert_eq!(json["stock"], 0);
    }

    #[test]
    fn test_accessors_with_product() {
        let entry = TopProductByBranch::new(
            "br-1".to_string(),
            "Centro".to_string(),
            Some(TopProduct { id: "p-1".to_string(), name: "Burger".to_string(), stock: 50 }),
        );

        assert_eq!(entry.product_id(), Some("p-1"));
        assert_eq!(entry.product_name(), Some("Burger"));
        assert_eq!(entry.stock(), 50);
    }
}
