//! # Franchise Client
//!
//! The entry points callers use to read and change franchise aggregates. Each write
//! loads the whole aggregate, applies one [`Mutation`] to the loaded copy and stores it
//! back with the version it was loaded at. If another writer got there first the store
//! reports a conflict, and the client reloads and applies the mutation again, up to
//! `max_attempts` times.
//!
//! Values are validated before the first load, so an invalid request never reaches
//! the store.
use crate::error::{EntityKind, FranchiseError};
use crate::id_gen::IdGenerator;
use crate::model::{BranchId, Franchise, FranchiseCreate, FranchiseId, ProductId};
use crate::mutator::{create_franchise, Mutation};
use crate::query::{max_stock_per_branch, MaxStockEntry};
use std::sync::Arc;
use store_actor::{DocumentClient, DocumentStore, ExpectedVersion, StoreError, Versioned};
use tracing::{debug, info, instrument, warn};

/// Client for franchise aggregates.
///
/// Generic over the store so tests can hand in a mock-backed client; by default it
/// talks to a [`DocumentActor`](store_actor::DocumentActor) through a
/// [`DocumentClient`].
#[derive(Clone)]
pub struct FranchiseClient<S = DocumentClient<Franchise>> {
    store: S,
    ids: Arc<dyn IdGenerator>,
    max_attempts: u32,
}

impl<S: DocumentStore<Franchise>> FranchiseClient<S> {
    pub fn new(store: S, ids: Arc<dyn IdGenerator>, max_attempts: u32) -> Self {
        Self {
            store,
            ids,
            max_attempts: max_attempts.max(1),
        }
    }

    #[instrument(skip(self))]
    pub async fn create_franchise(
        &self,
        payload: FranchiseCreate,
    ) -> Result<Franchise, FranchiseError> {
        let franchise = create_franchise(payload, self.ids.as_ref())?;
        debug!(franchise_id = %franchise.id(), "Storing new franchise");
        let stored = self
            .store
            .put(franchise, ExpectedVersion::Absent)
            .await
            .map_err(FranchiseError::from)?;
        info!(franchise_id = %stored.document.id(), "Franchise created");
        Ok(stored.document)
    }

    #[instrument(skip(self))]
    pub async fn get_franchise(&self, id: &FranchiseId) -> Result<Franchise, FranchiseError> {
        Ok(self.load(id).await?.document)
    }

    /// Every franchise in the order they were created. An empty store gives an empty list.
    #[instrument(skip(self))]
    pub async fn list_franchises(&self) -> Result<Vec<Franchise>, FranchiseError> {
        let all = self.store.list_all().await.map_err(FranchiseError::from)?;
        debug!(count = all.len(), "Listed franchises");
        Ok(all.into_iter().map(|v| v.document).collect())
    }

    #[instrument(skip(self))]
    pub async fn rename_franchise(
        &self,
        id: &FranchiseId,
        name: &str,
    ) -> Result<Franchise, FranchiseError> {
        self.mutate(id, Mutation::rename_franchise(name)?).await
    }

    #[instrument(skip(self))]
    pub async fn add_branch(
        &self,
        franchise_id: &FranchiseId,
        name: &str,
    ) -> Result<Franchise, FranchiseError> {
        self.mutate(franchise_id, Mutation::add_branch(name)?).await
    }

    #[instrument(skip(self))]
    pub async fn rename_branch(
        &self,
        franchise_id: &FranchiseId,
        branch_id: &BranchId,
        name: &str,
    ) -> Result<Franchise, FranchiseError> {
        let mutation = Mutation::rename_branch(branch_id.clone(), name)?;
        self.mutate(franchise_id, mutation).await
    }

    #[instrument(skip(self))]
    pub async fn add_product(
        &self,
        franchise_id: &FranchiseId,
        branch_id: &BranchId,
        name: &str,
        stock: Option<i64>,
    ) -> Result<Franchise, FranchiseError> {
        let mutation = Mutation::add_product(branch_id.clone(), name, stock)?;
        self.mutate(franchise_id, mutation).await
    }

    #[instrument(skip(self))]
    pub async fn remove_product(
        &self,
        franchise_id: &FranchiseId,
        branch_id: &BranchId,
        product_id: &ProductId,
    ) -> Result<Franchise, FranchiseError> {
        let mutation = Mutation::remove_product(branch_id.clone(), product_id.clone());
        self.mutate(franchise_id, mutation).await
    }

    #[instrument(skip(self))]
    pub async fn update_stock(
        &self,
        franchise_id: &FranchiseId,
        branch_id: &BranchId,
        product_id: &ProductId,
        stock: Option<i64>,
    ) -> Result<Franchise, FranchiseError> {
        let mutation = Mutation::update_stock(branch_id.clone(), product_id.clone(), stock)?;
        self.mutate(franchise_id, mutation).await
    }

    #[instrument(skip(self))]
    pub async fn rename_product(
        &self,
        franchise_id: &FranchiseId,
        branch_id: &BranchId,
        product_id: &ProductId,
        name: &str,
    ) -> Result<Franchise, FranchiseError> {
        let mutation = Mutation::rename_product(branch_id.clone(), product_id.clone(), name)?;
        self.mutate(franchise_id, mutation).await
    }

    #[instrument(skip(self))]
    pub async fn max_stock_per_branch(
        &self,
        franchise_id: &FranchiseId,
    ) -> Result<Vec<MaxStockEntry>, FranchiseError> {
        let loaded = self.load(franchise_id).await?;
        Ok(max_stock_per_branch(&loaded.document))
    }

    async fn load(&self, id: &FranchiseId) -> Result<Versioned<Franchise>, FranchiseError> {
        self.store
            .get(id.clone())
            .await
            .map_err(FranchiseError::from)?
            .ok_or_else(|| FranchiseError::not_found(EntityKind::Franchise, id))
    }

    /// Load-mutate-store with optimistic retries.
    async fn mutate(
        &self,
        id: &FranchiseId,
        mutation: Mutation,
    ) -> Result<Franchise, FranchiseError> {
        for attempt in 1..=self.max_attempts {
            let loaded = self.load(id).await?;
            let changed = mutation.clone().apply(loaded.document, self.ids.as_ref())?;

            match self
                .store
                .put(changed, ExpectedVersion::Exact(loaded.version))
                .await
            {
                Ok(stored) => {
                    info!(
                        op = mutation.kind(),
                        version = stored.version,
                        attempt,
                        "Franchise updated"
                    );
                    return Ok(stored.document);
                }
                Err(StoreError::Conflict { actual, .. }) => {
                    warn!(
                        op = mutation.kind(),
                        attempt,
                        loaded = loaded.version,
                        actual = ?actual,
                        "Write conflict, reloading"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }
        warn!(
            op = mutation.kind(),
            attempts = self.max_attempts,
            "Giving up after repeated conflicts"
        );
        Err(FranchiseError::Conflict { id: id.to_string() })
    }
}
