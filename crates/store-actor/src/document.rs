//! # Document Trait
//!
//! The `Document` trait is the contract every aggregate must satisfy to be kept by a
//! [`DocumentActor`](crate::DocumentActor). A document is always stored and fetched
//! whole: there is no partial projection and no partial update.
//!
//! Alongside the trait live the two types that carry optimistic concurrency through
//! the store: [`Versioned`] (a document plus the version token it was stored under)
//! and [`ExpectedVersion`] (the precondition a writer attaches to a `put`).

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any aggregate document must implement to be managed by `DocumentActor`.
///
/// # Architecture Note
/// The store never looks inside a document. All it needs is the key the document is
/// filed under, so the trait is deliberately tiny: an associated `Id` type and an
/// accessor. Everything domain-specific (locating children, applying mutations) stays
/// in the crate that owns the aggregate.
pub trait Document: Clone + Debug + Send + Sync + 'static {
    /// The key this document is stored under (e.g. a newtype around `String`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Returns the document's key.
    fn id(&self) -> &Self::Id;
}

/// A document together with the version token it was stored under.
///
/// Versions start at `1` on first insert and grow by one on every accepted `put`.
#[derive(Debug, Clone, PartialEq)]
pub struct Versioned<T> {
    pub version: u64,
    pub document: T,
}

/// Precondition attached to a `put`.
///
/// - `Absent`: the id must not be stored yet (first insert).
/// - `Exact(v)`: the stored version must still be `v`, i.e. nobody wrote the
///   document since it was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedVersion {
    Absent,
    Exact(u64),
}

impl Display for ExpectedVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpectedVersion::Absent => write!(f, "absent"),
            ExpectedVersion::Exact(version) => write!(f, "v{}", version),
        }
    }
}
