//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for setup failures.
///
/// These are fatal: a bad environment or an unreachable database terminates
/// the run before any view is exported.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// A required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// An environment variable is set but unusable (e.g. non-numeric port).
    #[error("Invalid value for environment variable {name}: {value}")]
    InvalidEnvVar {
        /// Variable name.
        name: &'static str,
        /// The offending value.
        value: String,
    },

    /// Error connecting to the database.
    #[error("Database connection error: {0}")]
    ConnectError(#[from] sqlx::Error),
}

/// Error types for catalog and view queries.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// A column value could not be decoded into the supported scalar set.
    #[error("Failed to decode column '{column}': {source}")]
    DecodeError {
        /// Column name.
        column: String,
        /// Underlying driver error.
        source: sqlx::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_var_message() {
        let err = InitializationError::MissingEnvVar("DB_HOST");
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: DB_HOST"
        );
    }

    #[test]
    fn test_invalid_env_var_message() {
        let err = InitializationError::InvalidEnvVar {
            name: "DB_PORT",
            value: "not-a-port".into(),
        };
        assert!(err.to_string().contains("DB_PORT"));
        assert!(err.to_string().contains("not-a-port"));
    }

    #[test]
    fn test_decode_error_names_column() {
        let err = CatalogError::DecodeError {
            column: "order_total".into(),
            source: sqlx::Error::ColumnNotFound("order_total".into()),
        };
        assert!(err.to_string().contains("order_total"));
    }
}
