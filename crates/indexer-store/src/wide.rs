//! Optional wide-column mirror of indexed records, for deployments that
//! want to fan records out to a ScyllaDB cluster in addition to (or instead
//! of) the canonical Postgres table. Gated behind the `scylla` feature and
//! the presence of `SCYLLADB_ADDR` in configuration; absence of either
//! simply means this module is never constructed.

use scylla::client::session::Session;
use scylla::client::session_builder::SessionBuilder;

use crate::error::{Result, StoreError};

pub struct WideStore {
    session: Session,
}

impl WideStore {
    pub async fn connect(addr: &str) -> Result<Self> {
        let session = SessionBuilder::new()
            .known_node(addr)
            .build()
            .await
            .map_err(|e| StoreError::Scylla(e.to_string()))?;
        session
            .query_unpaged(
                "CREATE KEYSPACE IF NOT EXISTS indexer WITH REPLICATION = \
                 {'class': 'SimpleStrategy', 'replication_factor': 1}",
                &[],
            )
            .await
            .map_err(|e| StoreError::Scylla(e.to_string()))?;
        session
            .query_unpaged(
                "CREATE TABLE IF NOT EXISTS indexer.records (\
                 repo text, collection text, rkey text, at_rev text, content text, deleted boolean, \
                 PRIMARY KEY ((repo, collection), rkey))",
                &[],
            )
            .await
            .map_err(|e| StoreError::Scylla(e.to_string()))?;
        Ok(Self { session })
    }

    /// Mirrors a record write. Deletes are propagated as tombstone rows
    /// rather than `DELETE`s, matching the relational store's soft-delete
    /// semantics so both stores agree on what "deleted" means.
    pub async fn write_record(
        &self,
        repo: &str,
        collection: &str,
        rkey: &str,
        at_rev: &str,
        content: &str,
        deleted: bool,
    ) -> Result<()> {
        self.session
            .query_unpaged(
                "INSERT INTO indexer.records (repo, collection, rkey, at_rev, content, deleted) \
                 VALUES (?, ?, ?, ?, ?, ?)",
                (repo, collection, rkey, at_rev, content, deleted),
            )
            .await
            .map_err(|e| StoreError::Scylla(e.to_string()))?;
        Ok(())
    }
}
