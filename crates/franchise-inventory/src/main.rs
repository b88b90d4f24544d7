//! Demo: builds one franchise, stocks a branch and prints the best-stocked products.
//!
//! ```bash
//! RUST_LOG=info cargo run -p franchise-inventory
//! FRANCHISE_ID_STRATEGY=sequential RUST_LOG=debug cargo run -p franchise-inventory
//! ```

use franchise_inventory::config::SystemConfig;
use franchise_inventory::lifecycle::FranchiseSystem;
use franchise_inventory::model::FranchiseCreate;
use store_actor::tracing::setup_tracing;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = SystemConfig::from_env()?;
    info!(?config, "Starting franchise inventory");
    let system = FranchiseSystem::new(&config);
    let client = &system.franchise_client;

    let span = tracing::info_span!("stocking");
    let franchise_id = async {
        let acme = client
            .create_franchise(FranchiseCreate::named("Acme"))
            .await?;
        let acme = client.add_branch(acme.id(), "North").await?;
        let north = acme.branches()[0].id().clone();
        client
            .add_product(acme.id(), &north, "Widget", Some(10))
            .await?;
        let acme = client
            .add_product(acme.id(), &north, "Gadget", Some(25))
            .await?;

        let widget = acme.branches()[0].products()[0].id().clone();
        if let Err(e) = client
            .update_stock(acme.id(), &north, &widget, Some(-1))
            .await
        {
            error!(error = %e, "Stock update rejected");
        }
        Ok::<_, franchise_inventory::error::FranchiseError>(acme.id().clone())
    }
    .instrument(span)
    .await?;

    for entry in client.max_stock_per_branch(&franchise_id).await? {
        info!(
            branch = %entry.branch_name,
            product = %entry.product_name,
            stock = entry.stock,
            "Best-stocked product"
        );
    }

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
