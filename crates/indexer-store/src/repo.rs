use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{Id, Result};

/// A repository (one per DID) known to the indexer.
///
/// `last_indexed_rev` and `first_rev_since_reset` drive the monotonic
/// backfill watermark: a repo is eligible for (re-)fetch whenever its
/// indexed revision hasn't caught up with the revision first observed on
/// the firehose since the owning PDS's last reset.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Repo {
    pub id: Id,
    pub did: String,
    pub pds: Id,
    pub last_known_key: Option<String>,
    pub last_indexed_rev: Option<String>,
    pub first_rev_since_reset: Option<String>,
    pub first_cursor_since_reset: i64,
    pub last_firehose_rev: Option<String>,
    pub tombstoned_at: Option<DateTime<Utc>>,
    pub last_index_attempt: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub failed_attempts: i32,
}

impl Repo {
    /// `FirstOrCreate`-equivalent insert: returns the row (possibly created
    /// by a concurrent racer) and whether *this* call won the insert race.
    pub async fn ensure_exists(
        pool: &PgPool,
        did: &str,
        pds: Id,
        last_known_key: Option<&str>,
    ) -> Result<(Self, bool)> {
        let mut tx = pool.begin().await?;
        if let Some(existing) = sqlx::query_as::<_, Repo>("SELECT * FROM repos WHERE did = $1 FOR UPDATE")
            .bind(did)
            .fetch_optional(&mut *tx)
            .await?
        {
            if existing.pds != pds {
                sqlx::query("UPDATE repos SET first_rev_since_reset = NULL WHERE id = $1")
                    .bind(existing.id)
                    .execute(&mut *tx)
                    .await?;
            }
            tx.commit().await?;
            return Ok((existing, false));
        }
        let created = sqlx::query_as::<_, Repo>(
            r#"
            INSERT INTO repos (did, pds, last_known_key, failed_attempts)
            VALUES ($1, $2, $3, 0)
            RETURNING *
            "#,
        )
        .bind(did)
        .bind(pds)
        .bind(last_known_key)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok((created, true))
    }

    pub async fn by_did(pool: &PgPool, did: &str) -> Result<Option<Self>> {
        sqlx::query_as::<_, Repo>("SELECT * FROM repos WHERE did = $1")
            .bind(did)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Records the outcome of one fetch attempt. `new_rev` is set on
    /// success; `error` is set (and `failed_attempts` incremented) on
    /// failure.
    pub async fn record_attempt(
        pool: &PgPool,
        id: Id,
        new_rev: Option<&str>,
        error: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE repos SET
                last_index_attempt = now(),
                last_indexed_rev = COALESCE($2, last_indexed_rev),
                last_error = $3,
                failed_attempts = CASE WHEN $3 IS NULL THEN 0 ELSE failed_attempts + 1 END
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(new_rev)
        .bind(error)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Sets the watermark recording the revision the firehose first saw for
    /// this repo since its PDS's last reset, if not already set.
    pub async fn set_first_rev_since_reset(pool: &PgPool, did: &str, rev: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE repos SET first_rev_since_reset = $2
            WHERE did = $1 AND first_rev_since_reset IS NULL
            "#,
        )
        .bind(did)
        .bind(rev)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Sets both halves of the post-reset watermark together, as the lister
    /// does on first sighting a repo and the firehose consumer does on a
    /// `too_big` commit.
    pub async fn set_watermark_if_unset(
        pool: &PgPool,
        did: &str,
        rev: &str,
        cursor: i64,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE repos SET first_rev_since_reset = $2, first_cursor_since_reset = $3
            WHERE did = $1 AND first_rev_since_reset IS NULL
            "#,
        )
        .bind(did)
        .bind(rev)
        .bind(cursor)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Unconditionally resets the watermark to force a fresh backfill, used
    /// when a `too_big` commit means the firehose diff alone can't bring the
    /// repo current.
    pub async fn reset_watermark(pool: &PgPool, id: Id, rev: &str, cursor: i64) -> Result<()> {
        sqlx::query("UPDATE repos SET first_rev_since_reset = $2, first_cursor_since_reset = $3 WHERE id = $1")
            .bind(id)
            .bind(rev)
            .bind(cursor)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Read-modify-write bump of `first_cursor_since_reset`; only ever
    /// increases, so a delayed message can't roll the watermark backwards.
    pub async fn bump_first_cursor_since_reset(pool: &PgPool, id: Id, cursor: i64) -> Result<()> {
        sqlx::query("UPDATE repos SET first_cursor_since_reset = $2 WHERE id = $1 AND first_cursor_since_reset < $2")
            .bind(id)
            .bind(cursor)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn set_last_firehose_rev(pool: &PgPool, id: Id, rev: &str) -> Result<()> {
        sqlx::query("UPDATE repos SET last_firehose_rev = $2 WHERE id = $1")
            .bind(id)
            .bind(rev)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Moves a repo to a newly observed PDS, clearing the watermark so the
    /// next scheduler pass forces a re-backfill under the new host.
    pub async fn set_pds(pool: &PgPool, id: Id, pds: Id) -> Result<()> {
        sqlx::query("UPDATE repos SET pds = $2, first_rev_since_reset = NULL WHERE id = $1 AND pds <> $2")
            .bind(id)
            .bind(pds)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn tombstone(pool: &PgPool, did: &str) -> Result<()> {
        sqlx::query("UPDATE repos SET tombstoned_at = now() WHERE did = $1")
            .bind(did)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Candidate repos due for backfill from a single PDS: never indexed,
    /// indexed but behind the first revision seen since the last reset, or
    /// behind the cursor-side watermark relative to the PDS's own reset
    /// cursor; capped at three consecutive failed attempts and excluded
    /// from disabled hosts.
    pub async fn due_for_fetch(pool: &PgPool, pds: Id, limit: i64) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Repo>(
            r#"
            SELECT r.* FROM repos r
            JOIN pds p ON p.id = r.pds
            WHERE r.pds = $1
              AND NOT p.disabled
              AND r.tombstoned_at IS NULL
              AND r.failed_attempts < 3
              AND (
                    r.last_indexed_rev IS NULL
                 OR r.last_indexed_rev = ''
                 OR (
                      r.first_rev_since_reset IS NOT NULL
                  AND r.first_rev_since_reset <> ''
                  AND r.last_indexed_rev < r.first_rev_since_reset
                 )
                 OR (
                      r.first_cursor_since_reset <> 0
                  AND r.first_cursor_since_reset < p.first_cursor_since_reset
                 )
              )
            ORDER BY r.last_index_attempt NULLS FIRST
            LIMIT $2
            "#,
        )
        .bind(pds)
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
