use store_actor::{Document, DocumentActor, DocumentStore, ExpectedVersion, StoreError};

// --- Test Document ---

#[derive(Clone, Debug, PartialEq)]
struct Ledger {
    id: String,
    entries: Vec<i64>,
}

impl Document for Ledger {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

fn ledger(id: &str) -> Ledger {
    Ledger {
        id: id.to_string(),
        entries: Vec::new(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = DocumentActor::<Ledger>::new(10);
    let handle = tokio::spawn(actor.run());

    // 1. First insert starts at version 1
    let stored = client
        .put(ledger("cash"), ExpectedVersion::Absent)
        .await
        .unwrap();
    assert_eq!(stored.version, 1);

    // 2. Load, change, store back
    let loaded = client.get("cash".to_string()).await.unwrap().unwrap();
    let mut changed = loaded.document.clone();
    changed.entries.push(42);
    let stored = client
        .put(changed, ExpectedVersion::Exact(loaded.version))
        .await
        .unwrap();
    assert_eq!(stored.version, 2);
    assert_eq!(stored.document.entries, vec![42]);

    // 3. Unknown ids are a miss, not an error
    assert!(client.get("bank".to_string()).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_stale_put_is_rejected_and_keeps_first_write() {
    let (actor, client) = DocumentActor::<Ledger>::new(10);
    tokio::spawn(actor.run());
    client
        .put(ledger("cash"), ExpectedVersion::Absent)
        .await
        .unwrap();

    let first = client.get("cash".to_string()).await.unwrap().unwrap();
    let second = client.get("cash".to_string()).await.unwrap().unwrap();

    let mut a = first.document.clone();
    a.entries.push(1);
    client
        .put(a, ExpectedVersion::Exact(first.version))
        .await
        .unwrap();

    let mut b = second.document.clone();
    b.entries.push(2);
    let result = client.put(b, ExpectedVersion::Exact(second.version)).await;
    assert_eq!(
        result,
        Err(StoreError::Conflict {
            id: "cash".to_string(),
            expected: ExpectedVersion::Exact(1),
            actual: Some(2),
        })
    );

    let current = client.get("cash".to_string()).await.unwrap().unwrap();
    assert_eq!(current.version, 2);
    assert_eq!(current.document.entries, vec![1]);
}

#[tokio::test]
async fn test_insert_over_existing_id_fails() {
    let (actor, client) = DocumentActor::<Ledger>::new(10);
    tokio::spawn(actor.run());
    client
        .put(ledger("cash"), ExpectedVersion::Absent)
        .await
        .unwrap();

    let result = client.put(ledger("cash"), ExpectedVersion::Absent).await;
    assert_eq!(result, Err(StoreError::AlreadyExists("cash".to_string())));
}

#[tokio::test]
async fn test_versioned_put_on_missing_document_conflicts() {
    let (actor, client) = DocumentActor::<Ledger>::new(10);
    tokio::spawn(actor.run());

    let result = client.put(ledger("ghost"), ExpectedVersion::Exact(3)).await;
    assert!(matches!(
        result,
        Err(StoreError::Conflict { actual: None, .. })
    ));
}

#[tokio::test]
async fn test_list_all_keeps_insertion_order() {
    let (actor, client) = DocumentActor::<Ledger>::new(10);
    tokio::spawn(actor.run());

    for id in ["zeta", "alpha", "mid"] {
        client.put(ledger(id), ExpectedVersion::Absent).await.unwrap();
    }
    // Overwriting keeps the original position
    client
        .put(ledger("zeta"), ExpectedVersion::Exact(1))
        .await
        .unwrap();

    // Through the trait, as domain code sees it
    let all = DocumentStore::list_all(&client).await.unwrap();
    let ids: Vec<&str> = all.iter().map(|v| v.document.id.as_str()).collect();
    assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    assert_eq!(all[0].version, 2);
}

#[tokio::test]
async fn test_closed_store_reports_actor_closed() {
    let (actor, client) = DocumentActor::<Ledger>::new(10);
    drop(actor);

    let result = client.get("cash".to_string()).await;
    assert_eq!(result, Err(StoreError::ActorClosed));
}
