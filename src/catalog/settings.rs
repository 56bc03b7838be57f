//! Database connection settings and pool initialization.
//!
//! Credentials come from the environment (`DB_HOST`, `DB_PORT`, `DB_NAME`,
//! `DB_USER`, `DB_PASSWORD`), typically loaded from a `.env` file by the
//! binary. Missing or malformed variables are fatal setup errors.

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::error_handling::InitializationError;

/// Connection settings for the warehouse database.
#[derive(Clone, Debug)]
pub struct DbSettings {
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Database name.
    pub name: String,
    /// Database user.
    pub user: String,
    /// Database password.
    pub password: String,
}

impl DbSettings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `MissingEnvVar` if any of the five variables is unset, or
    /// `InvalidEnvVar` if `DB_PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, InitializationError> {
        Ok(Self {
            host: require_env("DB_HOST")?,
            port: parse_port(require_env("DB_PORT")?)?,
            name: require_env("DB_NAME")?,
            user: require_env("DB_USER")?,
            password: require_env("DB_PASSWORD")?,
        })
    }

    /// Builds driver connect options from the settings.
    ///
    /// Options are built field by field rather than through a connection URL
    /// so passwords never need URL escaping.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password)
    }
}

fn require_env(name: &'static str) -> Result<String, InitializationError> {
    std::env::var(name).map_err(|_| InitializationError::MissingEnvVar(name))
}

fn parse_port(raw: String) -> Result<u16, InitializationError> {
    raw.parse()
        .map_err(|_| InitializationError::InvalidEnvVar {
            name: "DB_PORT",
            value: raw,
        })
}

/// Opens the shared connection pool.
///
/// The exporter is fully sequential, so the pool is capped at a single
/// connection, opened once at startup and reused for every query.
///
/// # Errors
///
/// Returns `ConnectError` if the database is unreachable or the credentials
/// are rejected.
pub async fn init_db_pool(settings: &DbSettings) -> Result<PgPool, InitializationError> {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(settings.connect_options())
        .await?;
    Ok(pool)
}
