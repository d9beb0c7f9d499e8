//! Station seeding for SDMIS 69.
//!
//! Writes the fixed list of fire stations and administrative services into
//! the `stations` collection of a MongoDB database, once. If the collection
//! already holds any document the run is a no-op.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use station_seed::prelude::*;
//!
//! let config = SeedConfig::from_env()?;
//! let outcome = seed_stations(&config).await?;
//! println!("{outcome}");
//! ```

pub mod config;
pub mod db;
pub mod stations;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConfigError, SeedConfig};
    pub use crate::db::{
        MongoStationStore, SeedError, SeedOutcome, Seeder, StationStore, seed_stations,
    };
    pub use crate::stations::{STATIONS, Station, StationSeed, StationType, stamped_stations};
}
