//! # Query Engine
//!
//! Read-only views derived from an aggregate.

use crate::model::{BranchId, Franchise, Product, ProductId};
use serde::{Deserialize, Serialize};

/// The best-stocked product of one branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxStockEntry {
    pub branch_id: BranchId,
    pub branch_name: String,
    pub product_id: ProductId,
    pub product_name: String,
    pub stock: u32,
}

/// One entry per branch that has products, in branch order.
///
/// Ties go to the product that comes first in the branch. `Iterator::max_by_key` keeps
/// the last maximum, so the reduction compares with a strict `>` instead.
pub fn max_stock_per_branch(franchise: &Franchise) -> Vec<MaxStockEntry> {
    franchise
        .branches()
        .iter()
        .filter_map(|branch| {
            let top = best_stocked(branch.products())?;
            Some(MaxStockEntry {
                branch_id: branch.id().clone(),
                branch_name: branch.name().to_string(),
                product_id: top.id().clone(),
                product_name: top.name().to_string(),
                stock: top.stock(),
            })
        })
        .collect()
}

fn best_stocked(products: &[Product]) -> Option<&Product> {
    products
        .iter()
        .reduce(|best, p| if p.stock() > best.stock() { p } else { best })
}
