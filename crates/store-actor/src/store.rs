//! # DocumentStore Trait
//!
//! The seam between an aggregate's domain logic and whatever keeps its documents.
//! Domain clients are written against this trait; [`DocumentClient`] implements it on
//! top of the in-memory actor, and tests can hand in a mock-backed client instead.
use crate::{Document, DocumentClient, ExpectedVersion, StoreError, Versioned};
use async_trait::async_trait;

/// Whole-document persistence contract.
///
/// # Example
///
/// ```rust
/// use store_actor::{Document, DocumentActor, DocumentStore, ExpectedVersion, StoreError};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32 }
/// impl Document for Note {
///     type Id = u32;
///     fn id(&self) -> &u32 { &self.id }
/// }
///
/// // Domain code only needs the trait.
/// async fn touch<S: DocumentStore<Note>>(store: &S, id: u32) -> Result<u64, StoreError> {
///     let loaded = store.get(id).await?.expect("note exists");
///     let stored = store.put(loaded.document, ExpectedVersion::Exact(loaded.version)).await?;
///     Ok(stored.version)
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = DocumentActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///     client.put(Note { id: 7 }, ExpectedVersion::Absent).await.unwrap();
///     assert_eq!(touch(&client, 7).await.unwrap(), 2);
/// }
/// ```
#[async_trait]
pub trait DocumentStore<T: Document>: Send + Sync {
    /// Fetch a whole document with its version, or `None` if the id is unknown.
    async fn get(&self, id: T::Id) -> Result<Option<Versioned<T>>, StoreError>;

    /// Upsert a whole document, guarded by `expected`. Returns the stored form.
    async fn put(&self, document: T, expected: ExpectedVersion)
        -> Result<Versioned<T>, StoreError>;

    /// Full scan of every stored document.
    async fn list_all(&self) -> Result<Vec<Versioned<T>>, StoreError>;
}

#[async_trait]
impl<T: Document> DocumentStore<T> for DocumentClient<T> {
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<Versioned<T>>, StoreError> {
        tracing::debug!("Sending request");
        DocumentClient::get(self, id).await
    }

    #[tracing::instrument(skip(self, document), fields(id = %document.id()))]
    async fn put(
        &self,
        document: T,
        expected: ExpectedVersion,
    ) -> Result<Versioned<T>, StoreError> {
        tracing::debug!("Sending request");
        DocumentClient::put(self, document, expected).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Versioned<T>>, StoreError> {
        tracing::debug!("Sending request");
        DocumentClient::list_all(self).await
    }
}
