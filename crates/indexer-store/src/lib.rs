//! Relational and (optional) wide-column storage models for the repo
//! indexer: PDS registry, repo registry, indexed records, quarantined bad
//! records, and the PLC operation log mirror.

pub mod bad_record;
pub mod error;
pub mod id;
pub mod nul_escape;
pub mod pds;
pub mod plc;
pub mod record;
pub mod repo;

#[cfg(feature = "scylla")]
pub mod wide;

pub use bad_record::BadRecord;
pub use error::{Result, StoreError};
pub use id::Id;
pub use pds::Pds;
pub use plc::{PlcLegacyCreateOp, PlcLogEntry, PlcOp, PlcOperation, PlcService, PlcTombstone};
pub use record::{NewRecord, Record};
pub use repo::Repo;

/// Runs the embedded schema migrations against `pool`.
pub async fn migrate(pool: &sqlx::PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
