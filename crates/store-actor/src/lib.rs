//! # Store Actor
//!
//! An in-memory, actor-backed document store for whole aggregates.
//!
//! Each [`DocumentActor<T>`] runs in its own Tokio task and owns a keyed map of
//! documents. Callers talk to it through a cloneable [`DocumentClient<T>`]; requests
//! travel over an `mpsc` channel and each one gets its answer on a `oneshot` channel.
//!
//! ## Why an actor?
//!
//! - **Whole-document semantics**: `get` returns the full aggregate, `put` replaces it.
//!   There is no partial update to reason about.
//! - **Atomic version checks**: requests are processed one at a time, so checking a
//!   writer's [`ExpectedVersion`] and storing its document cannot interleave with
//!   another write.
//! - **No locks in domain code**: each caller owns the copy it loaded. Nothing is shared
//!   except the channel.
//!
//! ## Optimistic Concurrency
//!
//! Load-mutate-store is only safe if the store notices when two writers loaded the same
//! version. Every document carries a version token:
//!
//! 1. `get` returns [`Versioned { version, document }`](Versioned).
//! 2. The caller changes its own copy.
//! 3. `put(document, ExpectedVersion::Exact(version))` succeeds only if nobody wrote in
//!    between, otherwise it fails with [`StoreError::Conflict`] and the caller can reload
//!    and retry.
//!
//! First inserts use [`ExpectedVersion::Absent`], which fails with
//! [`StoreError::AlreadyExists`] if the id is taken.
//!
//! ## Quick Start
//!
//! ```rust
//! use store_actor::{Document, DocumentActor, ExpectedVersion, StoreError};
//!
//! #[derive(Clone, Debug)]
//! struct Counter { id: String, hits: u32 }
//!
//! impl Document for Counter {
//!     type Id = String;
//!     fn id(&self) -> &String { &self.id }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = DocumentActor::<Counter>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let counter = Counter { id: "home".into(), hits: 0 };
//!     client.put(counter, ExpectedVersion::Absent).await.unwrap();
//!
//!     // Two writers load the same version...
//!     let a = client.get("home".into()).await.unwrap().unwrap();
//!     let b = client.get("home".into()).await.unwrap().unwrap();
//!
//!     // ...the first one wins...
//!     let mut first = a.document.clone();
//!     first.hits += 1;
//!     client.put(first, ExpectedVersion::Exact(a.version)).await.unwrap();
//!
//!     // ...and the second one is told instead of silently overwriting it.
//!     let mut second = b.document.clone();
//!     second.hits += 1;
//!     let result = client.put(second, ExpectedVersion::Exact(b.version)).await;
//!     assert!(matches!(result, Err(StoreError::Conflict { .. })));
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockStore<T>`, which hands out a real
//! `DocumentClient<T>` answered from scripted expectations.

pub mod actor;
pub mod client;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::DocumentActor;
pub use client::DocumentClient;
pub use document::{Document, ExpectedVersion, Versioned};
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use store::DocumentStore;
