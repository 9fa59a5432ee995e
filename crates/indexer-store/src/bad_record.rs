use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{Id, Result};

/// A record or block that failed to parse or verify, retained for later
/// inspection instead of being silently dropped.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BadRecord {
    pub id: Id,
    pub created_at: DateTime<Utc>,
    pub pds: Id,
    pub cursor: i64,
    pub error: String,
    pub content: Vec<u8>,
}

impl BadRecord {
    pub async fn insert(pool: &PgPool, pds: Id, cursor: i64, error: &str, content: &[u8]) -> Result<()> {
        sqlx::query(
            "INSERT INTO bad_records (pds, cursor, error, content) VALUES ($1, $2, $3, $4)",
        )
        .bind(pds)
        .bind(cursor)
        .bind(error)
        .bind(content)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Number of bad frames quarantined so far for one PDS; the consumer
    /// compares this against its cap before
    /// deciding whether to keep swallowing per-message failures.
    pub async fn count_for_pds(pool: &PgPool, pds: Id) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT count(*) FROM bad_records WHERE pds = $1")
            .bind(pds)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }
}
