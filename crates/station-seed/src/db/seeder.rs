//! Count-then-insert seeding of the station collection.

use std::fmt;

use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;

use super::store::{MongoStationStore, StationStore};
use crate::config::SeedConfig;
use crate::stations::{STATIONS, stamped_stations};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to connect to MongoDB: {0}")]
    Connect(#[source] mongodb::error::Error),
    #[error("Failed to count existing stations: {0}")]
    Count(#[source] mongodb::error::Error),
    #[error("Failed to insert stations: {0}")]
    Insert(#[source] mongodb::error::Error),
    #[error("Store acknowledged {inserted} of {expected} stations")]
    PartialInsert { expected: usize, inserted: usize },
}

/// What a seeding run did. Both variants are successful runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection already held documents; nothing was written.
    AlreadySeeded { existing: u64 },
    /// The collection was empty and the station list was inserted.
    Inserted { inserted: usize },
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedOutcome::AlreadySeeded { existing } => write!(
                f,
                "Stations already exist ({existing} found). Skipping seed."
            ),
            SeedOutcome::Inserted { inserted } => {
                write!(f, "Successfully seeded {inserted} stations for SDMIS 69")
            }
        }
    }
}

/// Seeds the station list into an empty collection.
///
/// The guard only checks whether the collection is empty. Two seeders
/// racing on an empty collection can both insert.
pub struct Seeder<S> {
    store: S,
}

impl Seeder<MongoStationStore> {
    /// Creates a seeder over the MongoDB database named in `config`.
    pub async fn connect(config: &SeedConfig) -> Result<Self, SeedError> {
        Ok(Self::new(MongoStationStore::connect(config).await?))
    }
}

impl<S: StationStore> Seeder<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Seeds, then closes the store whatever the result.
    pub async fn run(self) -> Result<SeedOutcome, SeedError> {
        let outcome = self.seed().await;
        self.store.close().await;
        outcome
    }

    /// Inserts the station list stamped with the current UTC time, unless
    /// the collection already holds documents.
    pub async fn seed(&self) -> Result<SeedOutcome, SeedError> {
        self.seed_at(OffsetDateTime::now_utc()).await
    }

    /// Like [`Seeder::seed`] with an explicit creation time for every station.
    pub async fn seed_at(&self, created_at: OffsetDateTime) -> Result<SeedOutcome, SeedError> {
        let existing = self.store.count().await?;
        if existing > 0 {
            info!("Found {} existing stations, skipping", existing);
            return Ok(SeedOutcome::AlreadySeeded { existing });
        }

        info!("Seeding {} stations...", STATIONS.len());
        let stations = stamped_stations(created_at);
        let inserted = self.store.insert_many(&stations).await?;
        if inserted != stations.len() {
            return Err(SeedError::PartialInsert {
                expected: stations.len(),
                inserted,
            });
        }

        info!("Seeded {} stations", inserted);
        Ok(SeedOutcome::Inserted { inserted })
    }
}

/// Connects with `config`, seeds and disconnects.
pub async fn seed_stations(config: &SeedConfig) -> Result<SeedOutcome, SeedError> {
    Seeder::connect(config).await?.run().await
}
