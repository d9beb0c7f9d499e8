//! Seeds the SDMIS 69 stations into MongoDB.
//!
//! Run with:
//! ```
//! MONGO_URL=mongodb://localhost:27017 DB_NAME=sdmis69 cargo run -p station-seed --bin seed-stations
//! ```
//!
//! `MONGO_URL` and `DB_NAME` may also come from a `.env` file in the working
//! directory, or be overridden with `--mongo-url` / `--db-name`.

use anyhow::Context;
use clap::Parser;
use station_seed::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "seed-stations",
    about = "Seed the SDMIS 69 stations collection",
    long_about = "Insert the SDMIS 69 fire stations and services into MongoDB, unless the stations collection already holds documents"
)]
struct SeedArgs {
    /// MongoDB connection string (overrides MONGO_URL)
    #[arg(long)]
    mongo_url: Option<String>,

    /// Database name (overrides DB_NAME)
    #[arg(long)]
    db_name: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = SeedArgs::parse();
    init_logging(args.verbose);

    let config = SeedConfig::from_overrides(args.mongo_url, args.db_name, |var| {
        std::env::var(var).ok()
    })
    .context("Invalid seeder configuration")?;
    tracing::debug!(?config, "Resolved configuration");

    let outcome = seed_stations(&config)
        .await
        .context("Seeding stations failed")?;

    println!("{outcome}");
    Ok(())
}
