use crate::error::FranchiseError;
use crate::model::validate::validate_name;
use crate::model::ProductId;
use serde::{Deserialize, Serialize};

/// A stocked item inside a [`Branch`](crate::model::Branch).
///
/// Products are only ever created by the mutator, which validates the name and stock
/// first, so a `Product` in an aggregate always has a non-empty name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductDocument")]
pub struct Product {
    id: ProductId,
    name: String,
    stock: u32,
}

impl Product {
    pub(crate) fn new(id: ProductId, name: String, stock: u32) -> Self {
        Self { id, name, stock }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_stock(&mut self, stock: u32) {
        self.stock = stock;
    }
}

/// Wire form of [`Product`], checked before it becomes one.
#[derive(Deserialize)]
struct ProductDocument {
    id: ProductId,
    name: String,
    stock: u32,
}

impl TryFrom<ProductDocument> for Product {
    type Error = FranchiseError;

    fn try_from(doc: ProductDocument) -> Result<Self, Self::Error> {
        Ok(Product::new(doc.id, validate_name(doc.name)?, doc.stock))
    }
}
