use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{Id, Result};

/// A PLC service endpoint entry, as embedded in `services`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlcService {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(rename = "endpoint")]
    pub endpoint: String,
}

/// A mainline PLC operation: rotation keys, verification methods, service
/// endpoints and aliases, chained to the previous operation's CID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlcOp {
    pub rotation_keys: Vec<String>,
    pub verification_methods: std::collections::BTreeMap<String, String>,
    pub also_known_as: Vec<String>,
    pub services: std::collections::BTreeMap<String, PlcService>,
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sig: Option<String>,
}

/// A tombstone operation, permanently retiring a DID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlcTombstone {
    pub prev: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sig: Option<String>,
}

/// The legacy, pre-`plc_operation` genesis operation shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlcLegacyCreateOp {
    pub signing_key: String,
    pub recovery_key: String,
    pub handle: String,
    pub service: String,
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sig: Option<String>,
}

impl PlcLegacyCreateOp {
    /// Synthesizes the equivalent modern operation shape, the same
    /// normalization the PLC mirror's serve endpoint needs in order to treat
    /// legacy and modern genesis operations uniformly.
    pub fn as_unsigned_op(&self) -> PlcOp {
        let mut services = std::collections::BTreeMap::new();
        services.insert(
            "atproto_pds".to_string(),
            PlcService {
                ty: "AtprotoPersonalDataServer".to_string(),
                endpoint: self.service.clone(),
            },
        );
        let mut verification_methods = std::collections::BTreeMap::new();
        verification_methods.insert("atproto".to_string(), self.signing_key.clone());
        PlcOp {
            rotation_keys: vec![self.recovery_key.clone()],
            verification_methods,
            also_known_as: vec![format!("at://{}", self.handle)],
            services,
            prev: self.prev.clone(),
            sig: None,
        }
    }
}

/// The tagged union of operation shapes found in the PLC operation log,
/// dispatched on the JSON `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlcOperation {
    #[serde(rename = "plc_operation")]
    Op(PlcOp),
    #[serde(rename = "plc_tombstone")]
    Tombstone(PlcTombstone),
    #[serde(rename = "create")]
    LegacyCreate(PlcLegacyCreateOp),
}

/// One row mirrored from the upstream PLC directory's `/export` log.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlcLogEntry {
    pub id: Id,
    pub created_at: DateTime<Utc>,
    pub did: String,
    pub cid: String,
    pub plc_timestamp: String,
    pub nullified: bool,
    pub operation: sqlx::types::Json<PlcOperation>,
}

impl PlcLogEntry {
    pub async fn max_plc_timestamp(pool: &PgPool) -> Result<Option<String>> {
        sqlx::query_scalar::<_, Option<String>>("SELECT max(plc_timestamp) FROM plc_log_entries")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Bulk-inserts new log entries, ignoring rows already mirrored
    /// (unique on `(did, cid)`).
    pub async fn insert_batch(
        pool: &PgPool,
        entries: &[(String, String, String, bool, PlcOperation)],
    ) -> Result<u64> {
        if entries.is_empty() {
            return Ok(0);
        }
        let mut affected = 0u64;
        let mut tx = pool.begin().await?;
        for (did, cid, plc_timestamp, nullified, operation) in entries {
            let result = sqlx::query(
                r#"
                INSERT INTO plc_log_entries (did, cid, plc_timestamp, nullified, operation)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (did, cid) DO NOTHING
                "#,
            )
            .bind(did)
            .bind(cid)
            .bind(plc_timestamp)
            .bind(nullified)
            .bind(sqlx::types::Json(operation))
            .execute(&mut *tx)
            .await?;
            affected += result.rows_affected();
        }
        tx.commit().await?;
        Ok(affected)
    }

    /// The most recent, non-nullified log entry for a DID, used to answer
    /// `GET /<did>` on the mirror's serve endpoint.
    pub async fn latest_for_did(pool: &PgPool, did: &str) -> Result<Option<Self>> {
        sqlx::query_as::<_, PlcLogEntry>(
            r#"
            SELECT * FROM plc_log_entries
            WHERE did = $1 AND NOT nullified
            ORDER BY plc_timestamp DESC
            LIMIT 1
            "#,
        )
        .bind(did)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
