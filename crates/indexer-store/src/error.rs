use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by the relational and wide-column store layers.
#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[cfg(feature = "scylla")]
    #[error("scylla error: {0}")]
    Scylla(String),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("host '{0}' is not permitted by the PDS whitelist")]
    HostNotAllowed(String),
}
