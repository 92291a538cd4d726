//! Application error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Unsupported database provider: {0}")]
    UnsupportedProvider(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Telemetry error: {0}")]
    TelemetryError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
