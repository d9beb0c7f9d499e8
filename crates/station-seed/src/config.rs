//! Connection settings for the seeder.

use std::env;
use std::fmt;

use thiserror::Error;

/// Environment variable holding the MongoDB connection string.
pub const MONGO_URL_VAR: &str = "MONGO_URL";

/// Environment variable holding the database name.
pub const DB_NAME_VAR: &str = "DB_NAME";

/// Collection the stations are written to.
pub const STATIONS_COLLECTION: &str = "stations";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not set; export it or add it to .env")]
    Missing { var: &'static str },
    #[error("{var} is set but empty")]
    Empty { var: &'static str },
}

/// Where to seed. Both fields are validated to be non-blank on construction.
#[derive(Clone, PartialEq, Eq)]
pub struct SeedConfig {
    connection_string: String,
    database_name: String,
}

impl SeedConfig {
    pub fn new(
        connection_string: impl Into<String>,
        database_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            connection_string: non_blank(MONGO_URL_VAR, connection_string.into())?,
            database_name: non_blank(DB_NAME_VAR, database_name.into())?,
        })
    }

    /// Reads `MONGO_URL` and `DB_NAME` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Reads both settings through `lookup`, failing on the first missing one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let connection_string =
            lookup(MONGO_URL_VAR).ok_or(ConfigError::Missing { var: MONGO_URL_VAR })?;
        let database_name = lookup(DB_NAME_VAR).ok_or(ConfigError::Missing { var: DB_NAME_VAR })?;
        Self::new(connection_string, database_name)
    }

    /// Values given explicitly win; missing ones are read through `lookup`.
    pub fn from_overrides<F>(
        connection_string: Option<String>,
        database_name: Option<String>,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|var| match var {
            MONGO_URL_VAR => connection_string.clone().or_else(|| lookup(var)),
            DB_NAME_VAR => database_name.clone().or_else(|| lookup(var)),
            _ => lookup(var),
        })
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

// The connection string may carry credentials.
impl fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedConfig")
            .field("connection_string", &"<redacted>")
            .field("database_name", &self.database_name)
            .finish()
    }
}

fn non_blank(var: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(trimmed.to_string())
}
