//! Integration tests for seeding against a real MongoDB server.
//!
//! To run these tests you need a reachable MongoDB server and the
//! `MONGO_URL` environment variable set.
//!
//! Run with: `MONGO_URL=mongodb://localhost:27017 cargo test -p station-seed --test seed_integration`
//!
//! Each test seeds into its own throwaway database and drops it afterwards,
//! so they can safely run against a development server.

use mongodb::bson::{Document, doc};
use mongodb::{Client, Database};
use station_seed::prelude::*;
use std::env;
use time::OffsetDateTime;

/// Build a config for a fresh database, skipping tests if MONGO_URL is not set.
fn test_config(test_id: &str) -> Option<SeedConfig> {
    let mongo_url = match env::var("MONGO_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: MONGO_URL not set");
            return None;
        }
    };

    let db_name = format!(
        "station_seed_{test_id}_{}",
        OffsetDateTime::now_utc().unix_timestamp_nanos()
    );
    Some(SeedConfig::new(mongo_url, db_name).expect("valid test config"))
}

async fn open_database(config: &SeedConfig) -> (Client, Database) {
    let client = Client::with_uri_str(config.connection_string())
        .await
        .expect("client");
    let database = client.database(config.database_name());
    (client, database)
}

async fn count(database: &Database, filter: Document) -> u64 {
    database
        .collection::<Document>("stations")
        .count_documents(filter)
        .await
        .expect("count")
}

async fn cleanup(client: Client, database: Database) {
    database.drop().await.expect("drop test database");
    client.shutdown().await;
}

#[tokio::test]
async fn test_seed_empty_collection_then_skip() {
    let Some(config) = test_config("seed_then_skip") else {
        return;
    };

    let first = seed_stations(&config).await.expect("first run");
    assert_eq!(first, SeedOutcome::Inserted { inserted: 14 });

    let (client, database) = open_database(&config).await;
    assert_eq!(count(&database, doc! {}).await, 14);
    assert_eq!(count(&database, doc! { "type": "caserne" }).await, 10);
    assert_eq!(count(&database, doc! { "type": "service" }).await, 4);
    assert_eq!(
        count(&database, doc! { "type": "service", "groupement": null }).await,
        4
    );
    assert_eq!(
        count(&database, doc! { "type": { "$nin": ["caserne", "service"] } }).await,
        0
    );
    assert_eq!(
        count(&database, doc! { "created_at": { "$type": "date" } }).await,
        14
    );

    let second = seed_stations(&config).await.expect("second run");
    assert_eq!(second, SeedOutcome::AlreadySeeded { existing: 14 });
    assert!(second.to_string().contains("14 found"));
    assert_eq!(count(&database, doc! {}).await, 14);

    cleanup(client, database).await;
}

#[tokio::test]
async fn test_skip_when_collection_has_any_document() {
    let Some(config) = test_config("preexisting") else {
        return;
    };

    let (client, database) = open_database(&config).await;
    database
        .collection::<Document>("stations")
        .insert_one(doc! { "name": "CIS Lyon Confluence", "type": "caserne" })
        .await
        .expect("insert preexisting station");

    let outcome = seed_stations(&config).await.expect("seed run");
    assert_eq!(outcome, SeedOutcome::AlreadySeeded { existing: 1 });
    assert_eq!(count(&database, doc! {}).await, 1);

    cleanup(client, database).await;
}

#[tokio::test]
async fn test_unreachable_server_is_a_connect_error() {
    if env::var("MONGO_URL").is_err() {
        eprintln!("Skipping test: MONGO_URL not set");
        return;
    }

    let config = SeedConfig::new(
        "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200",
        "station_seed_unreachable",
    )
    .expect("valid config");

    let err = seed_stations(&config).await.unwrap_err();
    assert!(matches!(err, SeedError::Connect(_)));
}
