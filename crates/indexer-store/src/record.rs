use serde_json::value::RawValue;
use sqlx::PgPool;

use crate::{nul_escape::escape_null_chars, Id, Result};

/// One indexed record, keyed by the triple `(repo, collection, rkey)`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Record {
    pub id: Id,
    pub repo: Id,
    pub collection: String,
    pub rkey: String,
    pub at_rev: String,
    pub content: serde_json::Value,
    pub deleted: bool,
}

/// One record pulled out of a CAR file, ready for batch insertion.
pub struct NewRecord<'a> {
    pub repo: Id,
    pub collection: &'a str,
    pub rkey: &'a str,
    pub at_rev: &'a str,
    pub content: Box<RawValue>,
}

impl Record {
    /// Inserts a batch of records, skipping or overwriting existing rows
    /// per the monotonic upsert rule: the stored row is only replaced when
    /// the incoming revision is newer (or the row has no revision yet) and
    /// the content actually differs, so identical re-fetches don't thrash
    /// the table or its indexes.
    ///
    /// Returns the number of rows actually written.
    pub async fn upsert_batch(pool: &PgPool, records: &[NewRecord<'_>]) -> Result<u64> {
        if records.is_empty() {
            return Ok(0);
        }
        let mut affected = 0u64;
        let mut tx = pool.begin().await?;
        for r in records {
            let escaped = escape_null_chars(r.content.get());
            let content: serde_json::Value = serde_json::from_str(&escaped)?;
            let result = sqlx::query(
                r#"
                INSERT INTO records (repo, collection, rkey, at_rev, content, deleted)
                VALUES ($1, $2, $3, $4, $5, false)
                ON CONFLICT (repo, collection, rkey) DO UPDATE SET
                    at_rev = EXCLUDED.at_rev,
                    content = EXCLUDED.content,
                    deleted = false
                WHERE
                    (records.at_rev IS NULL OR records.at_rev = '' OR records.at_rev < EXCLUDED.at_rev)
                    AND records.content IS DISTINCT FROM EXCLUDED.content
                "#,
            )
            .bind(r.repo)
            .bind(r.collection)
            .bind(r.rkey)
            .bind(r.at_rev)
            .bind(&content)
            .execute(&mut *tx)
            .await?;
            affected += result.rows_affected();
        }
        tx.commit().await?;
        Ok(affected)
    }

    /// Marks a record deleted without removing the row, so a later replay of
    /// an older revision can't resurrect it (the revision check above still
    /// applies to the tombstone write).
    pub async fn mark_deleted(pool: &PgPool, repo: Id, collection: &str, rkey: &str, at_rev: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE records SET deleted = true, at_rev = $4
            WHERE repo = $1 AND collection = $2 AND rkey = $3
              AND (at_rev IS NULL OR at_rev = '' OR at_rev < $4)
            "#,
        )
        .bind(repo)
        .bind(collection)
        .bind(rkey)
        .bind(at_rev)
        .execute(pool)
        .await?;
        Ok(())
    }
}
