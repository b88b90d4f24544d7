//! # Aggregate Mutator
//!
//! A [`Mutation`] is one validated change to a franchise aggregate. Values are checked
//! when the mutation is built, so a `Mutation` that exists can only fail on a missing
//! branch or product. Applying it consumes the loaded aggregate and returns the changed
//! one; nothing here touches the store.
//!
//! ```rust
//! use franchise_inventory::id_gen::SequentialIds;
//! use franchise_inventory::model::FranchiseCreate;
//! use franchise_inventory::mutator::{create_franchise, Mutation};
//!
//! let ids = SequentialIds::new("id");
//! let acme = create_franchise(FranchiseCreate::named("Acme"), &ids).unwrap();
//!
//! let acme = Mutation::add_branch("North").unwrap().apply(acme, &ids).unwrap();
//! assert_eq!(acme.branches()[0].name(), "North");
//!
//! // Bad values are rejected before any aggregate is involved.
//! assert!(Mutation::add_product("id_2".into(), "Widget", Some(-1)).is_err());
//! ```

use crate::error::FranchiseError;
use crate::id_gen::IdGenerator;
use crate::locator::{branch_mut, product_mut, product_position};
use crate::model::validate::{validate_name, validate_stock};
use crate::model::{Branch, BranchId, Franchise, FranchiseCreate, Product, ProductId};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    RenameFranchise {
        name: String,
    },
    AddBranch {
        name: String,
    },
    RenameBranch {
        branch_id: BranchId,
        name: String,
    },
    AddProduct {
        branch_id: BranchId,
        name: String,
        stock: u32,
    },
    RemoveProduct {
        branch_id: BranchId,
        product_id: ProductId,
    },
    UpdateStock {
        branch_id: BranchId,
        product_id: ProductId,
        stock: u32,
    },
    RenameProduct {
        branch_id: BranchId,
        product_id: ProductId,
        name: String,
    },
}

/// A single validated change to one franchise aggregate.
///
/// Mutations are plain values: the client clones and re-applies one when an optimistic
/// write has to be retried against a freshly loaded aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation(Op);

impl Mutation {
    pub fn rename_franchise(name: impl Into<String>) -> Result<Self, FranchiseError> {
        Ok(Self(Op::RenameFranchise {
            name: validate_name(name)?,
        }))
    }

    pub fn add_branch(name: impl Into<String>) -> Result<Self, FranchiseError> {
        Ok(Self(Op::AddBranch {
            name: validate_name(name)?,
        }))
    }

    pub fn rename_branch(
        branch_id: BranchId,
        name: impl Into<String>,
    ) -> Result<Self, FranchiseError> {
        Ok(Self(Op::RenameBranch {
            branch_id,
            name: validate_name(name)?,
        }))
    }

    /// Stock is checked before the name.
    pub fn add_product(
        branch_id: BranchId,
        name: impl Into<String>,
        stock: Option<i64>,
    ) -> Result<Self, FranchiseError> {
        let stock = validate_stock(stock)?;
        Ok(Self(Op::AddProduct {
            branch_id,
            name: validate_name(name)?,
            stock,
        }))
    }

    pub fn remove_product(branch_id: BranchId, product_id: ProductId) -> Self {
        Self(Op::RemoveProduct {
            branch_id,
            product_id,
        })
    }

    pub fn update_stock(
        branch_id: BranchId,
        product_id: ProductId,
        stock: Option<i64>,
    ) -> Result<Self, FranchiseError> {
        Ok(Self(Op::UpdateStock {
            branch_id,
            product_id,
            stock: validate_stock(stock)?,
        }))
    }

    pub fn rename_product(
        branch_id: BranchId,
        product_id: ProductId,
        name: impl Into<String>,
    ) -> Result<Self, FranchiseError> {
        Ok(Self(Op::RenameProduct {
            branch_id,
            product_id,
            name: validate_name(name)?,
        }))
    }

    /// Short operation name for logs.
    pub fn kind(&self) -> &'static str {
        match &self.0 {
            Op::RenameFranchise { .. } => "rename_franchise",
            Op::AddBranch { .. } => "add_branch",
            Op::RenameBranch { .. } => "rename_branch",
            Op::AddProduct { .. } => "add_product",
            Op::RemoveProduct { .. } => "remove_product",
            Op::UpdateStock { .. } => "update_stock",
            Op::RenameProduct { .. } => "rename_product",
        }
    }

    /// Applies the change to `franchise`.
    ///
    /// The target is located before any id is drawn from `ids`, so a failed lookup
    /// consumes no identifiers.
    pub fn apply(
        self,
        mut franchise: Franchise,
        ids: &dyn IdGenerator,
    ) -> Result<Franchise, FranchiseError> {
        match self.0 {
            Op::RenameFranchise { name } => franchise.set_name(name),
            Op::AddBranch { name } => {
                let id = BranchId::from(ids.next_id());
                let branch = Branch::new(id, name, franchise.id().clone());
                franchise.branches_mut().push(branch);
            }
            Op::RenameBranch { branch_id, name } => {
                branch_mut(&mut franchise, &branch_id)?.set_name(name);
            }
            Op::AddProduct {
                branch_id,
                name,
                stock,
            } => {
                let branch = branch_mut(&mut franchise, &branch_id)?;
                let product = Product::new(ProductId::from(ids.next_id()), name, stock);
                branch.products_mut().push(product);
            }
            Op::RemoveProduct {
                branch_id,
                product_id,
            } => {
                let branch = branch_mut(&mut franchise, &branch_id)?;
                let index = product_position(branch, &product_id)?;
                branch.products_mut().remove(index);
            }
            Op::UpdateStock {
                branch_id,
                product_id,
                stock,
            } => {
                product_mut(&mut franchise, &branch_id, &product_id)?.set_stock(stock);
            }
            Op::RenameProduct {
                branch_id,
                product_id,
                name,
            } => {
                product_mut(&mut franchise, &branch_id, &product_id)?.set_name(name);
            }
        }
        Ok(franchise)
    }
}

/// Builds a new aggregate from a creation payload.
///
/// Every nested value is validated before any id is drawn; one bad branch or product
/// rejects the whole payload. Ids are assigned parent first, in payload order.
pub fn create_franchise(
    payload: FranchiseCreate,
    ids: &dyn IdGenerator,
) -> Result<Franchise, FranchiseError> {
    let name = validate_name(payload.name)?;
    let mut branches = Vec::with_capacity(payload.branches.len());
    for branch in payload.branches {
        let branch_name = validate_name(branch.name)?;
        let products = branch
            .products
            .into_iter()
            .map(|p| Ok((validate_name(p.name)?, validate_stock(p.stock)?)))
            .collect::<Result<Vec<_>, FranchiseError>>()?;
        branches.push((branch_name, products));
    }

    let mut franchise = Franchise::new(ids.next_id().into(), name);
    for (branch_name, products) in branches {
        let mut branch = Branch::new(ids.next_id().into(), branch_name, franchise.id().clone());
        for (product_name, stock) in products {
            branch
                .products_mut()
                .push(Product::new(ids.next_id().into(), product_name, stock));
        }
        franchise.branches_mut().push(branch);
    }
    Ok(franchise)
}
