//! # Aggregate Locator
//!
//! Resolves a branch/product id path inside a loaded [`Franchise`]. Lookups always go
//! franchise → branch → product and stop at the first missing level, so a bad branch id
//! is reported as `NotFound(Branch)` even when a product id was also given.
//!
//! Ids are unique within their parent, so the first match is the only match.
//!
//! [`locate`] is the read-side entry point for callers that hold a loaded aggregate
//! and want to address a node without changing it. The [`mutator`](crate::mutator)
//! resolves its targets through the same position lookups, so reads and writes report
//! identical `NotFound` errors.

use crate::error::{EntityKind, FranchiseError};
use crate::model::{Branch, BranchId, Franchise, Product, ProductId};

/// The node a path resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Located<'a> {
    Franchise(&'a Franchise),
    Branch(&'a Branch),
    Product {
        branch: &'a Branch,
        product: &'a Product,
    },
}

/// Resolves `branch_id` and `product_id` against `root`.
///
/// Without a `branch_id` the root itself is returned; a `product_id` is only looked at
/// once a branch has been found.
pub fn locate<'a>(
    root: &'a Franchise,
    branch_id: Option<&BranchId>,
    product_id: Option<&ProductId>,
) -> Result<Located<'a>, FranchiseError> {
    let Some(branch_id) = branch_id else {
        return Ok(Located::Franchise(root));
    };
    let branch = find_branch(root, branch_id)?;
    match product_id {
        None => Ok(Located::Branch(branch)),
        Some(product_id) => Ok(Located::Product {
            branch,
            product: find_product(branch, product_id)?,
        }),
    }
}

pub fn find_branch<'a>(root: &'a Franchise, id: &BranchId) -> Result<&'a Branch, FranchiseError> {
    Ok(&root.branches()[branch_position(root, id)?])
}

pub fn find_product<'a>(
    branch: &'a Branch,
    id: &ProductId,
) -> Result<&'a Product, FranchiseError> {
    Ok(&branch.products()[product_position(branch, id)?])
}

/// Index of the branch with `id`. Every branch lookup, shared or mutable, goes through
/// here.
pub(crate) fn branch_position(root: &Franchise, id: &BranchId) -> Result<usize, FranchiseError> {
    root.branches()
        .iter()
        .position(|b| b.id() == id)
        .ok_or_else(|| FranchiseError::not_found(EntityKind::Branch, id))
}

/// Index of the product with `id`. Every product lookup goes through here.
pub(crate) fn product_position(branch: &Branch, id: &ProductId) -> Result<usize, FranchiseError> {
    branch
        .products()
        .iter()
        .position(|p| p.id() == id)
        .ok_or_else(|| FranchiseError::not_found(EntityKind::Product, id))
}

pub(crate) fn branch_mut<'a>(
    root: &'a mut Franchise,
    id: &BranchId,
) -> Result<&'a mut Branch, FranchiseError> {
    let index = branch_position(root, id)?;
    Ok(&mut root.branches_mut()[index])
}

pub(crate) fn product_mut<'a>(
    root: &'a mut Franchise,
    branch_id: &BranchId,
    product_id: &ProductId,
) -> Result<&'a mut Product, FranchiseError> {
    let branch = branch_mut(root, branch_id)?;
    let index = product_position(branch, product_id)?;
    Ok(&mut branch.products_mut()[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_gen::SequentialIds;
    use crate::model::{BranchCreate, FranchiseCreate, ProductCreate};
    use crate::mutator::{create_franchise, Mutation};

    fn acme() -> Franchise {
        let payload = FranchiseCreate {
            name: "Acme".to_string(),
            branches: vec![BranchCreate {
                name: "North".to_string(),
                products: vec![ProductCreate {
                    name: "Widget".to_string(),
                    stock: Some(10),
                }],
            }],
        };
        // f_1, f_2 (branch), f_3 (product)
        create_franchise(payload, &SequentialIds::new("f")).unwrap()
    }

    #[test]
    fn test_no_path_returns_root() {
        let root = acme();
        let result = locate(&root, None, None).unwrap();
        assert_eq!(result, Located::Franchise(&root));
    }

    #[test]
    fn test_product_id_without_branch_is_ignored() {
        let root = acme();
        let result = locate(&root, None, Some(&ProductId::from("f_3"))).unwrap();
        assert!(matches!(result, Located::Franchise(_)));
    }

    #[test]
    fn test_full_path_resolves_product() {
        let root = acme();
        let result = locate(&root, Some(&"f_2".into()), Some(&"f_3".into())).unwrap();
        match result {
            Located::Product { branch, product } => {
                assert_eq!(branch.name(), "North");
                assert_eq!(product.name(), "Widget");
            }
            other => panic!("Expected product, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_branch_reported_before_product() {
        let root = acme();
        let result = locate(&root, Some(&"nope".into()), Some(&"also-nope".into()));
        assert_eq!(
            result,
            Err(FranchiseError::not_found(EntityKind::Branch, "nope"))
        );
    }

    #[test]
    fn test_missing_product_in_existing_branch() {
        let root = acme();
        let result = locate(&root, Some(&"f_2".into()), Some(&"p-x".into()));
        assert_eq!(
            result,
            Err(FranchiseError::not_found(EntityKind::Product, "p-x"))
        );
    }

    #[test]
    fn test_reads_and_writes_report_the_same_missing_node() {
        let ids = SequentialIds::new("x");
        let cases: [(BranchId, ProductId); 2] =
            [("nope".into(), "f_3".into()), ("f_2".into(), "p-x".into())];
        for (branch_id, product_id) in cases {
            let root = acme();
            let read = locate(&root, Some(&branch_id), Some(&product_id)).err();
            let write = Mutation::update_stock(branch_id, product_id, Some(1))
                .unwrap()
                .apply(acme(), &ids)
                .err();
            assert!(read.is_some());
            assert_eq!(read, write);
        }
    }
}
