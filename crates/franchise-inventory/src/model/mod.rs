//! The franchise → branch → product entity graph.
//!
//! Entities expose read-only accessors. Only the [`mutator`](crate::mutator) changes
//! them, which keeps ids stable and back-references consistent.

pub mod branch;
pub mod franchise;
pub mod ids;
pub mod product;
pub mod request;
pub mod validate;

pub use branch::Branch;
pub use franchise::Franchise;
pub use ids::{BranchId, FranchiseId, ProductId};
pub use product::Product;
pub use request::{BranchCreate, FranchiseCreate, ProductCreate};
