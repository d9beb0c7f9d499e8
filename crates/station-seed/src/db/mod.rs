//! Database integration for seeding stations.
//!
//! The [`Seeder`] runs the count-then-insert guard against any
//! [`StationStore`]; [`MongoStationStore`] is the MongoDB backend.

mod seeder;
mod store;

pub use seeder::{SeedError, SeedOutcome, Seeder, seed_stations};
pub use store::{MongoStationStore, StationStore};
