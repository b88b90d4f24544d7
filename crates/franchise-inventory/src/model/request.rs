//! Payloads for creating a franchise together with its initial children.
//!
//! Stock arrives as a signed, optional value so that negative or missing input can be
//! rejected with [`FranchiseError::InvalidStock`](crate::error::FranchiseError) instead
//! of failing to deserialize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FranchiseCreate {
    pub name: String,
    #[serde(default)]
    pub branches: Vec<BranchCreate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchCreate {
    pub name: String,
    #[serde(default)]
    pub products: Vec<ProductCreate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub stock: Option<i64>,
}

impl FranchiseCreate {
    /// A franchise with no initial branches.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            branches: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_default_to_empty() {
        let payload: FranchiseCreate =
            serde_json::from_str(r#"{"name":"Acme","branches":[{"name":"North"}]}"#).unwrap();
        assert_eq!(payload.branches.len(), 1);
        assert!(payload.branches[0].products.is_empty());
    }

    #[test]
    fn test_missing_stock_is_kept_as_none() {
        let product: ProductCreate = serde_json::from_str(r#"{"name":"Widget"}"#).unwrap();
        assert_eq!(product.stock, None);
    }
}
