//! # Franchise Inventory
//!
//! A franchise owns branches, each branch owns products with a stock count. The whole
//! tree is one aggregate: it is loaded, changed and stored back as a unit.
//!
//! - **[model]**: the entity graph ([`Franchise`](model::Franchise),
//!   [`Branch`](model::Branch), [`Product`](model::Product)) and creation payloads.
//! - **[locator]**: resolves a branch/product id path inside a loaded aggregate.
//! - **[mutator]**: validated changes applied to an owned aggregate.
//! - **[query]**: derived views such as the best-stocked product per branch.
//! - **[clients]**: [`FranchiseClient`](clients::FranchiseClient), the
//!   load-mutate-store entry points with optimistic retries.
//! - **[lifecycle]**: starts and stops the store actor.
//!
//! Persistence lives in the `store_actor` crate.

pub mod clients;
pub mod config;
pub mod error;
pub mod id_gen;
pub mod lifecycle;
pub mod locator;
pub mod model;
pub mod mutator;
pub mod query;
