use franchise_inventory::config::{IdStrategy, SystemConfig};
use franchise_inventory::error::{EntityKind, FranchiseError};
use franchise_inventory::lifecycle::FranchiseSystem;
use franchise_inventory::model::{
    BranchCreate, BranchId, FranchiseCreate, FranchiseId, ProductCreate, ProductId,
};
use std::collections::HashSet;

fn system() -> FranchiseSystem {
    FranchiseSystem::new(&SystemConfig::default())
}

/// Acme with branch North holding Widget(10) and Gadget(25).
async fn stocked_acme(system: &FranchiseSystem) -> (FranchiseId, BranchId, ProductId, ProductId) {
    let client = &system.franchise_client;
    let acme = client
        .create_franchise(FranchiseCreate::named("Acme"))
        .await
        .expect("Failed to create franchise");
    let acme = client.add_branch(acme.id(), "North").await.unwrap();
    let north = acme.branches()[0].id().clone();
    client
        .add_product(acme.id(), &north, "Widget", Some(10))
        .await
        .unwrap();
    let acme = client
        .add_product(acme.id(), &north, "Gadget", Some(25))
        .await
        .unwrap();
    let products = acme.branches()[0].products();
    (
        acme.id().clone(),
        north,
        products[0].id().clone(),
        products[1].id().clone(),
    )
}

#[tokio::test]
async fn test_best_stocked_product_per_branch() {
    let system = system();
    let (acme, _, _, _) = stocked_acme(&system).await;

    let result = system
        .franchise_client
        .max_stock_per_branch(&acme)
        .await
        .unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].branch_name, "North");
    assert_eq!(result[0].product_name, "Gadget");
    assert_eq!(result[0].stock, 25);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_negative_stock_leaves_stored_aggregate_unchanged() {
    let system = system();
    let (acme, north, widget, _) = stocked_acme(&system).await;
    let client = &system.franchise_client;

    let result = client.update_stock(&acme, &north, &widget, Some(-1)).await;
    assert_eq!(
        result,
        Err(FranchiseError::InvalidStock { value: Some(-1) })
    );

    let stored = client.get_franchise(&acme).await.unwrap();
    assert_eq!(stored.branches()[0].products()[0].stock(), 10);
}

#[tokio::test]
async fn test_removing_a_product_twice() {
    let system = system();
    let (acme, north, widget, gadget) = stocked_acme(&system).await;
    let client = &system.franchise_client;

    let after = client.remove_product(&acme, &north, &widget).await.unwrap();
    let remaining: Vec<&ProductId> = after.branches()[0]
        .products()
        .iter()
        .map(|p| p.id())
        .collect();
    assert_eq!(remaining, vec![&gadget]);

    let again = client.remove_product(&acme, &north, &widget).await;
    assert_eq!(
        again,
        Err(FranchiseError::not_found(EntityKind::Product, &widget))
    );
}

#[tokio::test]
async fn test_unknown_branch_reported_before_product() {
    let system = system();
    let (acme, _, widget, _) = stocked_acme(&system).await;
    let missing = BranchId::from("no-such-branch");

    let result = system
        .franchise_client
        .update_stock(&acme, &missing, &widget, Some(3))
        .await;
    assert_eq!(
        result,
        Err(FranchiseError::not_found(EntityKind::Branch, &missing))
    );
}

#[tokio::test]
async fn test_unknown_franchise_reported_first() {
    let system = system();
    let client = &system.franchise_client;
    let ghost = FranchiseId::from("ghost");

    let result = client
        .rename_product(&ghost, &"b".into(), &"p".into(), "Gizmo")
        .await;
    assert_eq!(
        result,
        Err(FranchiseError::not_found(EntityKind::Franchise, &ghost))
    );
    assert!(matches!(
        client.max_stock_per_branch(&ghost).await,
        Err(FranchiseError::NotFound {
            kind: EntityKind::Franchise,
            ..
        })
    ));
}

#[tokio::test]
async fn test_add_branch_grows_by_one_with_fresh_id() {
    let system = system();
    let (acme, north, _, _) = stocked_acme(&system).await;

    let after = system
        .franchise_client
        .add_branch(&acme, "South")
        .await
        .unwrap();
    assert_eq!(after.branches().len(), 2);
    let south = &after.branches()[1];
    assert_ne!(south.id(), &north);
    assert!(south.products().is_empty());
    assert_eq!(south.franchise_id(), &acme);
}

#[tokio::test]
async fn test_renames_keep_other_fields() {
    let system = system();
    let (acme, north, widget, _) = stocked_acme(&system).await;
    let client = &system.franchise_client;

    client.rename_franchise(&acme, "Acme Corp").await.unwrap();
    client.rename_branch(&acme, &north, "North East").await.unwrap();
    let after = client
        .rename_product(&acme, &north, &widget, "Widget Pro")
        .await
        .unwrap();

    assert_eq!(after.name(), "Acme Corp");
    assert_eq!(after.branches()[0].name(), "North East");
    let product = &after.branches()[0].products()[0];
    assert_eq!(product.name(), "Widget Pro");
    assert_eq!(product.stock(), 10);
    assert_eq!(after.branches()[0].products().len(), 2);
}

#[tokio::test]
async fn test_concurrent_adds_are_all_kept() {
    let config = SystemConfig {
        max_attempts: 16,
        ..SystemConfig::default()
    };
    let system = FranchiseSystem::new(&config);
    let (acme, north, _, _) = stocked_acme(&system).await;

    let mut tasks = Vec::new();
    for i in 0..10 {
        let client = system.franchise_client.clone();
        let (acme, north) = (acme.clone(), north.clone());
        tasks.push(tokio::spawn(async move {
            client
                .add_product(&acme, &north, &format!("Item {}", i), Some(i))
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().expect("Concurrent add failed");
    }

    let stored = system.franchise_client.get_franchise(&acme).await.unwrap();
    let products = stored.branches()[0].products();
    assert_eq!(products.len(), 12);
    let names: HashSet<&str> = products.iter().map(|p| p.name()).collect();
    for i in 0..10 {
        assert!(names.contains(format!("Item {}", i).as_str()));
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_franchises_in_creation_order() {
    let system = system();
    let client = &system.franchise_client;
    assert!(client.list_franchises().await.unwrap().is_empty());

    for name in ["Zeta", "Alpha", "Mid"] {
        client
            .create_franchise(FranchiseCreate::named(name))
            .await
            .unwrap();
    }
    let names: Vec<String> = client
        .list_franchises()
        .await
        .unwrap()
        .iter()
        .map(|f| f.name().to_string())
        .collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
}

#[tokio::test]
async fn test_create_with_initial_children_and_sequential_ids() {
    let config = SystemConfig {
        id_strategy: IdStrategy::Sequential,
        ..SystemConfig::default()
    };
    let system = FranchiseSystem::new(&config);
    let client = &system.franchise_client;

    let payload: FranchiseCreate = serde_json::from_value(serde_json::json!({
        "name": "Acme",
        "branches": [
            { "name": "North", "products": [{ "name": "Widget", "stock": 4 }] },
            { "name": "South" }
        ]
    }))
    .unwrap();
    let acme = client.create_franchise(payload).await.unwrap();

    assert_eq!(acme.id().as_str(), "id_1");
    assert_eq!(acme.branches()[0].id().as_str(), "id_2");
    assert_eq!(acme.branches()[0].products()[0].id().as_str(), "id_3");
    assert_eq!(acme.branches()[1].id().as_str(), "id_4");
    assert_eq!(client.get_franchise(acme.id()).await.unwrap(), acme);

    let bad = FranchiseCreate {
        name: "Broken".to_string(),
        branches: vec![BranchCreate {
            name: "East".to_string(),
            products: vec![ProductCreate {
                name: "Widget".to_string(),
                stock: Some(-5),
            }],
        }],
    };
    assert_eq!(
        client.create_franchise(bad).await,
        Err(FranchiseError::InvalidStock { value: Some(-5) })
    );
    assert_eq!(client.list_franchises().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_aggregate_serializes_as_nested_document() {
    let system = system();
    let (acme, _, _, _) = stocked_acme(&system).await;
    let stored = system.franchise_client.get_franchise(&acme).await.unwrap();

    let json = serde_json::to_value(&stored).unwrap();
    assert_eq!(json["name"], "Acme");
    assert_eq!(json["branches"][0]["franchise_id"], acme.as_str());
    assert_eq!(json["branches"][0]["products"][1]["name"], "Gadget");
    assert_eq!(json["branches"][0]["products"][1]["stock"], 25);
}
