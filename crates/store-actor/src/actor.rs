//! # Document Store Actor
//!
//! This module defines the `DocumentActor`, the server half of the store. It owns the
//! in-memory map of documents and processes requests one at a time, which is what makes
//! the version check and the write of a `put` a single atomic step.

use crate::client::DocumentClient;
use crate::document::{Document, ExpectedVersion, Versioned};
use crate::error::StoreError;
use crate::message::StoreRequest;
use indexmap::IndexMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that keeps whole documents keyed by id.
///
/// # Architecture Note
/// This struct owns the state (`store`) and the receiver end of the channel. Requests
/// are processed *sequentially* in [`run`](DocumentActor::run), so the store needs no
/// `Mutex`: exclusive ownership inside the task is the lock.
///
/// Documents are kept in an `IndexMap` so that [`ListAll`](StoreRequest::ListAll)
/// returns them in the order they were first inserted. Overwriting a document keeps
/// its position.
///
/// # Optimistic Concurrency
///
/// Every stored document carries a version token. A writer loads a document, changes
/// its own copy, then `put`s it back with `ExpectedVersion::Exact(loaded_version)`.
/// If anybody else wrote in between, the versions no longer match and the `put` is
/// rejected with [`StoreError::Conflict`] instead of silently overwriting the other
/// write.
///
/// ```rust
/// use store_actor::{Document, DocumentActor, ExpectedVersion};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, body: String }
///
/// impl Document for Note {
///     type Id = u32;
///     fn id(&self) -> &u32 { &self.id }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = DocumentActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let note = Note { id: 1, body: "hello".into() };
///     let stored = client.put(note, ExpectedVersion::Absent).await.unwrap();
///     assert_eq!(stored.version, 1);
///
///     let loaded = client.get(1).await.unwrap().unwrap();
///     assert_eq!(loaded.document.body, "hello");
/// }
/// ```
pub struct DocumentActor<T: Document> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: IndexMap<T::Id, Versioned<T>>,
}

impl<T: Document> DocumentActor<T> {
    /// Creates a new `DocumentActor` and its associated `DocumentClient`.
    ///
    /// `buffer_size` is the capacity of the request channel and must be non-zero.
    /// When the channel is full, callers wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, DocumentClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: IndexMap::new(),
        };
        let client = DocumentClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing requests until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g. "Franchise" instead of the full path)
        let document_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(document_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(document_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Put {
                    document,
                    expected,
                    respond_to,
                } => {
                    let id = document.id().clone();
                    debug!(document_type, %id, %expected, "Put");
                    let result = self.put(document, expected);
                    match &result {
                        Ok(stored) => info!(
                            document_type,
                            %id,
                            version = stored.version,
                            size = self.store.len(),
                            "Stored"
                        ),
                        Err(e) => warn!(document_type, %id, error = %e, "Put rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::ListAll { respond_to } => {
                    debug!(document_type, size = self.store.len(), "ListAll");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
            }
        }

        info!(document_type, size = self.store.len(), "Shutdown");
    }

    fn put(&mut self, document: T, expected: ExpectedVersion) -> Result<Versioned<T>, StoreError> {
        let id = document.id().clone();
        let current = self.store.get(&id).map(|stored| stored.version);

        let version = match (expected, current) {
            (ExpectedVersion::Absent, None) => 1,
            (ExpectedVersion::Absent, Some(_)) => {
                return Err(StoreError::AlreadyExists(id.to_string()));
            }
            (ExpectedVersion::Exact(wanted), Some(actual)) if wanted == actual => actual + 1,
            (ExpectedVersion::Exact(_), actual) => {
                return Err(StoreError::Conflict {
                    id: id.to_string(),
                    expected,
                    actual,
                });
            }
        };

        let stored = Versioned { version, document };
        self.store.insert(id, stored.clone());
        Ok(stored)
    }
}
