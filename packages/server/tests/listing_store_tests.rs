//! Store-level integration tests against a live local MongoDB. All ignored by
//! default; run with `cargo test -- --ignored` when an instance is up.
//!
//! Each test uses its own throwaway database so parallel runs cannot
//! interfere, and drops it on the way out.

use mongodb::bson::oid::ObjectId;
use mongodb::Client;
use server_core::domains::listings::fixtures::fixtures;
use server_core::domains::listings::{ListingFields, ListingInput, ListingStore, StoreError};

const MONGO_URL: &str = "mongodb://127.0.0.1:27017";

struct TestDb {
    client: Client,
    name: String,
}

impl TestDb {
    async fn new() -> Self {
        let client = Client::with_uri_str(MONGO_URL)
            .await
            .expect("parse connection string");
        let name = format!("travel_test_{}", ObjectId::new().to_hex());
        Self { client, name }
    }

    fn store(&self) -> ListingStore {
        ListingStore::new(&self.client, &self.name)
    }

    async fn cleanup(self) {
        self.client.database(&self.name).drop().await.ok();
    }
}

fn beach_house() -> ListingInput {
    ListingInput {
        title: "Beach House".to_string(),
        description: "Ocean view".to_string(),
        image_url: None,
        price: 150.0,
        location: "Malibu".to_string(),
        country: "USA".to_string(),
    }
}

#[tokio::test]
#[ignore = "requires a MongoDB instance on 127.0.0.1:27017"]
async fn create_then_get_returns_the_same_record() {
    let db = TestDb::new().await;
    let store = db.store();

    let created = store.create(beach_house()).await.unwrap();
    assert_eq!(created.title, "Beach House");
    assert_eq!(created.price, 150.0);

    let fetched = store.get(&created.id.to_hex()).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a MongoDB instance on 127.0.0.1:27017"]
async fn invalid_input_persists_nothing() {
    let db = TestDb::new().await;
    let store = db.store();

    let input = ListingInput {
        title: String::new(),
        ..beach_house()
    };
    assert!(matches!(
        store.create(input).await,
        Err(StoreError::Validation("title"))
    ));
    assert!(store.list_all().await.unwrap().is_empty());

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a MongoDB instance on 127.0.0.1:27017"]
async fn update_overwrites_all_five_fields_and_keeps_the_image() {
    let db = TestDb::new().await;
    let store = db.store();

    let created = store.create(beach_house()).await.unwrap();
    let updated = store
        .update(
            &created.id.to_hex(),
            ListingFields {
                title: "Cliff House".to_string(),
                description: "Clifftop view".to_string(),
                price: 300.0,
                location: "Big Sur".to_string(),
                country: "United States".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Cliff House");
    assert_eq!(updated.description, "Clifftop view");
    assert_eq!(updated.price, 300.0);
    assert_eq!(updated.location, "Big Sur");
    assert_eq!(updated.country, "United States");
    assert_eq!(updated.image, created.image);

    // Fetching afterwards reflects only the new values.
    let fetched = store.get(&created.id.to_hex()).await.unwrap().unwrap();
    assert_eq!(fetched, updated);

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a MongoDB instance on 127.0.0.1:27017"]
async fn update_on_unknown_id_is_not_found() {
    let db = TestDb::new().await;
    let store = db.store();

    let result = store
        .update(
            &ObjectId::new().to_hex(),
            ListingFields {
                title: "T".to_string(),
                description: "D".to_string(),
                price: 1.0,
                location: "L".to_string(),
                country: "C".to_string(),
            },
        )
        .await;
    assert!(matches!(result, Err(StoreError::NotFound)));

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a MongoDB instance on 127.0.0.1:27017"]
async fn delete_is_idempotent() {
    let db = TestDb::new().await;
    let store = db.store();

    let created = store.create(beach_house()).await.unwrap();
    let id = created.id.to_hex();

    store.delete(&id).await.unwrap();
    assert!(store.get(&id).await.unwrap().is_none());

    // Second delete of the same id is not an error.
    store.delete(&id).await.unwrap();

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a MongoDB instance on 127.0.0.1:27017"]
async fn seed_path_replaces_the_collection() {
    let db = TestDb::new().await;
    let store = db.store();

    store.create(beach_house()).await.unwrap();

    store.delete_all().await.unwrap();
    let inserted = store.bulk_create(fixtures()).await.unwrap();

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), inserted);
    assert!(all.iter().all(|l| !l.title.is_empty()));
    assert!(!all.iter().any(|l| l.title == "Beach House"));

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a MongoDB instance on 127.0.0.1:27017"]
async fn bulk_create_with_one_bad_input_inserts_nothing() {
    let db = TestDb::new().await;
    let store = db.store();

    let mut inputs = fixtures();
    inputs.push(ListingInput {
        country: String::new(),
        ..beach_house()
    });

    assert!(matches!(
        store.bulk_create(inputs).await,
        Err(StoreError::Validation("country"))
    ));
    assert!(store.list_all().await.unwrap().is_empty());

    db.cleanup().await;
}
