//! # Store Messages
//!
//! Message types exchanged between [`DocumentClient`](crate::DocumentClient) and
//! [`DocumentActor`](crate::DocumentActor).

use crate::document::{Document, ExpectedVersion, Versioned};
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store actor.
///
/// The set is intentionally the whole-document contract and nothing more:
///
/// - **Get**: fetch one document with its version, or `None`.
/// - **Put**: upsert one document, guarded by an [`ExpectedVersion`].
/// - **ListAll**: full scan, in insertion order.
#[derive(Debug)]
pub enum StoreRequest<T: Document> {
    Get {
        id: T::Id,
        respond_to: Response<Option<Versioned<T>>>,
    },
    Put {
        document: T,
        expected: ExpectedVersion,
        respond_to: Response<Versioned<T>>,
    },
    ListAll {
        respond_to: Response<Vec<Versioned<T>>>,
    },
}
