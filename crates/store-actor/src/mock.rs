//! # Mock Store & Testing Guide
//!
//! `MockStore<T>` hands out a real [`DocumentClient<T>`] whose requests are answered from
//! a queue of expectations instead of an actual store. It lets you test domain clients
//! (load-mutate-store loops, error mapping, retry policies) deterministically, and
//! inject failures that are awkward to provoke with a real actor.
//!
//! ## When to use the Mock vs the Real Actor
//!
//! | Feature | MockStore | DocumentActor |
//! |---------|-----------|---------------|
//! | **State** | None, answers are scripted | Real versioned documents |
//! | **Determinism** | Total | Subject to scheduling of concurrent callers |
//! | **Error Injection** | Easy (`return_err`) | Only conflicts, by racing writers |
//! | **Use Case** | Logic *around* the store | Store behaviour and full flows |
//!
//! ## Scripting a Conversation
//!
//! ```rust
//! use store_actor::mock::MockStore;
//! use store_actor::{Document, ExpectedVersion, StoreError, Versioned};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Note { id: u32, body: String }
//! impl Document for Note {
//!     type Id = u32;
//!     fn id(&self) -> &u32 { &self.id }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Note>::new();
//!     mock.expect_get(1).return_ok(Some(Versioned {
//!         version: 3,
//!         document: Note { id: 1, body: "draft".into() },
//!     }));
//!     // The first write loses a race, the second one goes through.
//!     mock.expect_put().return_err(StoreError::Conflict {
//!         id: "1".into(),
//!         expected: ExpectedVersion::Exact(3),
//!         actual: Some(4),
//!     });
//!
//!     let client = mock.client();
//!     let loaded = client.get(1).await.unwrap().unwrap();
//!     let result = client.put(loaded.document, ExpectedVersion::Exact(3)).await;
//!     assert!(matches!(result, Err(StoreError::Conflict { .. })));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Raw Channel Helpers
//!
//! When a test needs to inspect *what* was sent (for example the `ExpectedVersion` a
//! writer attached), use [`create_mock_store`] together with [`expect_get`],
//! [`expect_put`] and [`expect_list`] and answer each request by hand.

use crate::client::DocumentClient;
use crate::document::{Document, ExpectedVersion, Versioned};
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// How a scripted `put` answers.
enum PutResponse {
    /// Echo the submitted document back, stored under this version.
    Stored(u64),
    Err(StoreError),
}

/// Represents an expected request to the mock store.
enum Expectation<T: Document> {
    Get {
        id: T::Id,
        response: Result<Option<Versioned<T>>, StoreError>,
    },
    Put {
        response: PutResponse,
    },
    ListAll {
        response: Result<Vec<Versioned<T>>, StoreError>,
    },
}

/// Shared state between the mock handle and its background responder task.
struct MockState<T: Document> {
    expectations: VecDeque<Expectation<T>>,
    puts: Vec<(T, ExpectedVersion)>,
    mismatches: Vec<String>,
}

/// A mock store with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation is recorded as a mismatch and its reply channel is dropped, so the
/// caller sees [`StoreError::ActorDropped`]; [`verify`](MockStore::verify) then fails.
pub struct MockStore<T: Document> {
    client: DocumentClient<T>,
    state: Arc<Mutex<MockState<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Document> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> MockStore<T> {
    /// Creates a new mock store with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let state = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            puts: Vec::new(),
            mismatches: Vec::new(),
        }));
        let shared = state.clone();

        // Spawn background task to answer requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = shared.lock().unwrap();
                let expectation = state.expectations.pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: wanted,
                            response,
                        }),
                    ) => {
                        if id != wanted {
                            state
                                .mismatches
                                .push(format!("get({}) but expected get({})", id, wanted));
                            continue;
                        }
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Put {
                            document,
                            expected,
                            respond_to,
                        },
                        Some(Expectation::Put { response }),
                    ) => {
                        state.puts.push((document.clone(), expected));
                        let reply = match response {
                            PutResponse::Stored(version) => Ok(Versioned { version, document }),
                            PutResponse::Err(e) => Err(e),
                        };
                        let _ = respond_to.send(reply);
                    }
                    (
                        StoreRequest::ListAll { respond_to },
                        Some(Expectation::ListAll { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        let name = match request {
                            StoreRequest::Get { .. } => "get",
                            StoreRequest::Put { .. } => "put",
                            StoreRequest::ListAll { .. } => "list_all",
                        };
                        state.mismatches.push(format!("unexpected {}", name));
                    }
                }
            }
        });

        Self {
            client: DocumentClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> DocumentClient<T> {
        self.client.clone()
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            state: self.state.clone(),
        }
    }

    /// Expects a `put` of any document.
    pub fn expect_put(&mut self) -> PutExpectationBuilder<T> {
        PutExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Expects a `list_all`.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Every document submitted through `put`, with the precondition it carried.
    pub fn puts(&self) -> Vec<(T, ExpectedVersion)> {
        self.state.lock().unwrap().puts.clone()
    }

    /// Verifies that all expectations were met and no request was unexpected.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.mismatches.is_empty() {
            panic!("Unexpected store requests: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: Document> {
    id: T::Id,
    state: Arc<Mutex<MockState<T>>>,
}

impl<T: Document> GetExpectationBuilder<T> {
    /// Answer with the given document (or `None` for a miss).
    pub fn return_ok(self, value: Option<Versioned<T>>) {
        self.state.lock().unwrap().expectations.push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Answer with an error.
    pub fn return_err(self, error: StoreError) {
        self.state.lock().unwrap().expectations.push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `put` expectations.
pub struct PutExpectationBuilder<T: Document> {
    state: Arc<Mutex<MockState<T>>>,
}

impl<T: Document> PutExpectationBuilder<T> {
    /// Accept the write and echo the document back under `version`.
    pub fn return_stored(self, version: u64) {
        self.state.lock().unwrap().expectations.push_back(Expectation::Put {
            response: PutResponse::Stored(version),
        });
    }

    /// Reject the write.
    pub fn return_err(self, error: StoreError) {
        self.state.lock().unwrap().expectations.push_back(Expectation::Put {
            response: PutResponse::Err(error),
        });
    }
}

/// Builder for `list_all` expectations.
pub struct ListExpectationBuilder<T: Document> {
    state: Arc<Mutex<MockState<T>>>,
}

impl<T: Document> ListExpectationBuilder<T> {
    /// Answer with the given documents.
    pub fn return_ok(self, documents: Vec<Versioned<T>>) {
        self.state
            .lock()
            .unwrap()
            .expectations
            .push_back(Expectation::ListAll {
                response: Ok(documents),
            });
    }

    /// Answer with an error.
    pub fn return_err(self, error: StoreError) {
        self.state
            .lock()
            .unwrap()
            .expectations
            .push_back(Expectation::ListAll {
                response: Err(error),
            });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests: the test pulls them off `receiver` with the helpers
/// below, inspects them and replies through the returned one-shot sender.
pub fn create_mock_store<T: Document>(
    buffer_size: usize,
) -> (DocumentClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (DocumentClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<Versioned<T>>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Put request
pub async fn expect_put<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T,
    ExpectedVersion,
    oneshot::Sender<Result<Versioned<T>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Put {
            document,
            expected,
            respond_to,
        }) => Some((document, expected, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a ListAll request
pub async fn expect_list<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<Versioned<T>>, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::ListAll { respond_to }) => Some(respond_to),
        _ => None,
    }
}
