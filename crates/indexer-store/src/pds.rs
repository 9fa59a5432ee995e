use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{Id, Result};

/// A known Personal Data Server.
///
/// Field names follow the original `PDS` model: a unique `host`, the last
/// firehose cursor consumed from it, the cursor value observed the first
/// time a reset was detected since the row was created, the last time its
/// full repo listing was refreshed, and a per-host crawl rate override.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Pds {
    pub id: Id,
    pub host: String,
    pub cursor: i64,
    pub first_cursor_since_reset: i64,
    pub last_list: Option<DateTime<Utc>>,
    pub crawl_limit: i32,
    pub disabled: bool,
}

impl Pds {
    /// Inserts the host if absent, returning the existing or newly created row.
    pub async fn ensure_exists(pool: &PgPool, host: &str) -> Result<Self> {
        let host = host.trim_end_matches('/');
        if let Some(existing) = sqlx::query_as::<_, Pds>("SELECT * FROM pds WHERE host = $1")
            .bind(host)
            .fetch_optional(pool)
            .await?
        {
            return Ok(existing);
        }
        sqlx::query_as::<_, Pds>(
            r#"
            INSERT INTO pds (host, cursor, first_cursor_since_reset, crawl_limit, disabled)
            VALUES ($1, 0, 0, 10, false)
            ON CONFLICT (host) DO UPDATE SET host = EXCLUDED.host
            RETURNING *
            "#,
        )
        .bind(host)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Pds>("SELECT * FROM pds ORDER BY host")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn enabled(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Pds>("SELECT * FROM pds WHERE NOT disabled ORDER BY host")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn set_cursor(pool: &PgPool, id: Id, cursor: i64) -> Result<()> {
        sqlx::query("UPDATE pds SET cursor = $2 WHERE id = $1")
            .bind(id)
            .bind(cursor)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Records the cursor value seen right after a reset, used by the
    /// scheduler's "has this repo caught up since the last reset" predicate.
    pub async fn set_first_cursor_since_reset(pool: &PgPool, id: Id, cursor: i64) -> Result<()> {
        sqlx::query("UPDATE pds SET first_cursor_since_reset = $2 WHERE id = $1")
            .bind(id)
            .bind(cursor)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Stamped on completion of a listing attempt, success or failure, so a
    /// persistently broken host doesn't get re-selected on every tick.
    pub async fn stamp_last_list(pool: &PgPool, id: Id) -> Result<()> {
        sqlx::query("UPDATE pds SET last_list = now() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// One PDS due for a repo-listing refresh: `last_list` unset or older
    /// than `refresh_after`.
    pub async fn next_due_for_listing(
        pool: &PgPool,
        refresh_after: chrono::Duration,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Pds>(
            r#"
            SELECT * FROM pds
            WHERE NOT disabled
              AND (last_list IS NULL OR last_list < now() - $1::interval)
            ORDER BY last_list NULLS FIRST
            LIMIT 1
            FOR UPDATE SKIP LOCKED
            "#,
        )
        .bind(refresh_after)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn set_crawl_limit(pool: &PgPool, host: &str, limit: i32) -> Result<()> {
        sqlx::query("UPDATE pds SET crawl_limit = $2 WHERE host = $1")
            .bind(host)
            .bind(limit)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Marks a host disabled, used when a previously discovered PDS falls
    /// out of the whitelist.
    pub async fn set_disabled(pool: &PgPool, host: &str, disabled: bool) -> Result<()> {
        sqlx::query("UPDATE pds SET disabled = $2 WHERE host = $1")
            .bind(host)
            .bind(disabled)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn by_host(pool: &PgPool, host: &str) -> Result<Option<Self>> {
        sqlx::query_as::<_, Pds>("SELECT * FROM pds WHERE host = $1")
            .bind(host.trim_end_matches('/'))
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn by_id(pool: &PgPool, id: Id) -> Result<Option<Self>> {
        sqlx::query_as::<_, Pds>("SELECT * FROM pds WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }
}
