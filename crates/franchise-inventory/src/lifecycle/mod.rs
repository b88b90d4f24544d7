//! # System Lifecycle
//!
//! Starts the franchise store actor and hands out the client that talks to it.
//!
//! ## Startup
//!
//! [`FranchiseSystem::new`] creates a [`DocumentActor<Franchise>`] with the configured
//! channel capacity, spawns its `run` loop on the Tokio runtime and wraps the resulting
//! [`DocumentClient`](store_actor::DocumentClient) in a [`FranchiseClient`] together
//! with the configured id generator and retry limit.
//!
//! ```rust
//! use franchise_inventory::config::SystemConfig;
//! use franchise_inventory::lifecycle::FranchiseSystem;
//! use franchise_inventory::model::FranchiseCreate;
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = FranchiseSystem::new(&SystemConfig::default());
//!     let acme = system
//!         .franchise_client
//!         .create_franchise(FranchiseCreate::named("Acme"))
//!         .await
//!         .unwrap();
//!     assert!(acme.branches().is_empty());
//!     system.shutdown().await.unwrap();
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the actor's channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once queued requests
//!    are answered
//! 3. **Await completion** - wait for the actor task to finish
//!
//! Clones of the client keep the channel open. Drop them before calling
//! [`shutdown`](FranchiseSystem::shutdown), otherwise it waits until they are gone.
//!
//! ## Observability
//!
//! Logging is initialised separately with
//! [`setup_tracing`](store_actor::tracing::setup_tracing):
//!
//! ```bash
//! RUST_LOG=info cargo run      # Store start/stop and each stored write
//! RUST_LOG=debug cargo run     # Every store request
//! ```

use crate::clients::FranchiseClient;
use crate::config::SystemConfig;
use crate::model::Franchise;
use store_actor::DocumentActor;
use tokio::task::JoinHandle;
use tracing::info;

pub struct FranchiseSystem {
    pub franchise_client: FranchiseClient,
    handles: Vec<JoinHandle<()>>,
}

impl FranchiseSystem {
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        let (actor, store_client) = DocumentActor::<Franchise>::new(config.channel_capacity);
        let store_handle = tokio::spawn(actor.run());

        let franchise_client =
            FranchiseClient::new(store_client, config.id_generator(), config.max_attempts);
        info!(
            channel_capacity = config.channel_capacity,
            max_attempts = config.max_attempts,
            id_strategy = ?config.id_strategy,
            "Franchise system started"
        );

        Self {
            franchise_client,
            handles: vec![store_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        drop(self.franchise_client);
        for handle in self.handles {
            handle.await?;
        }
        info!("Franchise system stopped");
        Ok(())
    }
}
