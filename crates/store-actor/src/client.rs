//! # Document Client
//!
//! The cloneable handle used to talk to a [`DocumentActor`](crate::DocumentActor).

use crate::document::{Document, ExpectedVersion, Versioned};
use crate::error::StoreError;
use crate::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `DocumentActor`.
///
/// The client holds only a sender, so cloning it is cheap and every clone talks to the
/// same actor. Each call sends one request and awaits its one-shot reply.
///
/// * `ActorClosed` - the actor task has stopped and the request could not be sent.
/// * `ActorDropped` - the actor accepted the request but never answered it.
#[derive(Clone)]
pub struct DocumentClient<T: Document> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Document> DocumentClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<Versioned<T>>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn put(
        &self,
        document: T,
        expected: ExpectedVersion,
    ) -> Result<Versioned<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Put {
                document,
                expected,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn list_all(&self) -> Result<Vec<Versioned<T>>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::ListAll { respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}
