//! Storage backends for station documents.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use tracing::{debug, info};

use super::seeder::SeedError;
use crate::config::{STATIONS_COLLECTION, SeedConfig};
use crate::stations::Station;

/// The operations the seeder needs from a station collection.
#[async_trait]
pub trait StationStore: Send + Sync + Sized {
    /// Number of documents currently in the collection.
    async fn count(&self) -> Result<u64, SeedError>;

    /// Inserts all stations in one batch and returns how many the store acknowledged.
    async fn insert_many(&self, stations: &[Station]) -> Result<usize, SeedError>;

    /// Releases the underlying connection.
    async fn close(self);
}

/// `stations` collection of a MongoDB database.
pub struct MongoStationStore {
    client: Client,
    collection: Collection<Station>,
}

impl MongoStationStore {
    /// Opens a client, selects the configured database and pings it.
    pub async fn connect(config: &SeedConfig) -> Result<Self, SeedError> {
        let client = Client::with_uri_str(config.connection_string())
            .await
            .map_err(SeedError::Connect)?;
        let database = client.database(config.database_name());

        // Driver connections are lazy; ping so an unreachable server fails here.
        if let Err(e) = database.run_command(doc! { "ping": 1 }).await {
            client.shutdown().await;
            return Err(SeedError::Connect(e));
        }

        info!(
            "Connected to MongoDB database {}, collection {}",
            config.database_name(),
            STATIONS_COLLECTION
        );

        let collection = database.collection::<Station>(STATIONS_COLLECTION);
        Ok(Self { client, collection })
    }
}

#[async_trait]
impl StationStore for MongoStationStore {
    async fn count(&self) -> Result<u64, SeedError> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(SeedError::Count)
    }

    async fn insert_many(&self, stations: &[Station]) -> Result<usize, SeedError> {
        let result = self
            .collection
            .insert_many(stations)
            .await
            .map_err(SeedError::Insert)?;
        Ok(result.inserted_ids.len())
    }

    async fn close(self) {
        debug!("Closing MongoDB client");
        self.client.shutdown().await;
    }
}
