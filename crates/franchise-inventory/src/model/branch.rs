use crate::error::{EntityKind, FranchiseError};
use crate::model::validate::{ensure_unique, validate_name};
use crate::model::{BranchId, FranchiseId, Product};
use serde::{Deserialize, Serialize};

/// A location of a franchise, holding its products in insertion order.
///
/// `franchise_id` is set from the owning [`Franchise`](crate::model::Franchise) when the
/// branch is created and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BranchDocument")]
pub struct Branch {
    id: BranchId,
    name: String,
    franchise_id: FranchiseId,
    products: Vec<Product>,
}

impl Branch {
    pub(crate) fn new(id: BranchId, name: String, franchise_id: FranchiseId) -> Self {
        Self {
            id,
            name,
            franchise_id,
            products: Vec::new(),
        }
    }

    pub fn id(&self) -> &BranchId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn franchise_id(&self) -> &FranchiseId {
        &self.franchise_id
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn products_mut(&mut self) -> &mut Vec<Product> {
        &mut self.products
    }
}

/// Wire form of [`Branch`]. The back-reference is checked by the owning franchise.
#[derive(Deserialize)]
struct BranchDocument {
    id: BranchId,
    name: String,
    franchise_id: FranchiseId,
    #[serde(default)]
    products: Vec<Product>,
}

impl TryFrom<BranchDocument> for Branch {
    type Error = FranchiseError;

    fn try_from(doc: BranchDocument) -> Result<Self, Self::Error> {
        ensure_unique(EntityKind::Product, doc.products.iter().map(Product::id))?;
        Ok(Self {
            id: doc.id,
            name: validate_name(doc.name)?,
            franchise_id: doc.franchise_id,
            products: doc.products,
        })
    }
}
