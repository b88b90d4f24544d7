//! # Franchise Errors
//!
//! Every failure the domain can report. Locator and mutator failures are produced
//! before the store is written, so the stored aggregate is untouched whenever one of
//! them is returned.

use std::fmt::Display;
use store_actor::StoreError;
use thiserror::Error;

/// Which level of the aggregate a lookup failed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Franchise,
    Branch,
    Product,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Franchise => "Franchise",
            EntityKind::Branch => "Branch",
            EntityKind::Product => "Product",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FranchiseError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("Invalid stock: {value:?}")]
    InvalidStock { value: Option<i64> },

    #[error("Name must not be empty")]
    InvalidName,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Concurrent updates kept conflicting on franchise {id}")]
    Conflict { id: String },

    /// A stored or incoming document breaks an aggregate invariant.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl FranchiseError {
    pub fn not_found(kind: EntityKind, id: impl Display) -> Self {
        FranchiseError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

impl From<StoreError> for FranchiseError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict { id, .. } | StoreError::AlreadyExists(id) => {
                FranchiseError::Conflict { id }
            }
            other => FranchiseError::StoreUnavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_actor::ExpectedVersion;

    #[test]
    fn test_store_errors_map_to_domain_errors() {
        let conflict = StoreError::Conflict {
            id: "f-1".to_string(),
            expected: ExpectedVersion::Exact(2),
            actual: Some(3),
        };
        assert_eq!(
            FranchiseError::from(conflict),
            FranchiseError::Conflict {
                id: "f-1".to_string()
            }
        );
        assert!(matches!(
            FranchiseError::from(StoreError::ActorClosed),
            FranchiseError::StoreUnavailable(_)
        ));
    }

    #[test]
    fn test_not_found_message_names_the_level() {
        let e = FranchiseError::not_found(EntityKind::Branch, "b-9");
        assert_eq!(e.to_string(), "Branch not found: b-9");
    }
}
