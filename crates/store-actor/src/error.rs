//! # Store Errors
//!
//! Common error type returned by every store operation, whether the request went
//! through a real [`DocumentActor`](crate::DocumentActor) or a mock.

use crate::document::ExpectedVersion;

/// Errors that can occur within the document store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Document already exists: {0}")]
    AlreadyExists(String),
    #[error("Version conflict on {id}: expected {expected}, found {actual:?}")]
    Conflict {
        id: String,
        expected: ExpectedVersion,
        actual: Option<u64>,
    },
}
