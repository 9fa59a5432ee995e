//! Per-host token-bucket rate limiting, grounded on `ratelimits.go`'s
//! map-of-limiters shape but built on `governor`'s GCRA implementation
//! instead of hand-rolling one.
//!
//! `RateLimiter::wait`/`set_limit`/`set_all_limits` mirror the original's
//! method names; `set_limit`/`set_all_limits` persist the new rate to the
//! `pds.crawl_limit` column so it survives a restart.

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;

use governor::{Quota, RateLimiter as Governor};
use indexer_store::Pds;
use sqlx::PgPool;
use tokio::sync::RwLock;

/// Default requests/sec applied to a host with no persisted `crawl_limit`
/// and no override, matching the original's `defaultRateLimit`.
pub const DEFAULT_RATE_LIMIT: u32 = 10;

type HostLimiter = Governor<governor::state::NotKeyed, governor::state::InMemoryState, governor::clock::DefaultClock>;

fn limiter_for_rate(rate: u32) -> Arc<HostLimiter> {
    let rate = NonZeroU32::new(rate.max(1)).unwrap();
    let burst = NonZeroU32::new(rate.get().saturating_mul(2).max(1)).unwrap();
    Arc::new(Governor::direct(Quota::per_second(rate).allow_burst(burst)))
}

/// A map from PDS host to a live token-bucket limiter, backed by the `pds`
/// table for persistence of rate overrides.
pub struct RateLimiter {
    pool: PgPool,
    limiters: RwLock<HashMap<String, Arc<HostLimiter>>>,
}

impl RateLimiter {
    /// Builds the initial map from every known PDS's persisted
    /// `crawl_limit`, mirroring the original's `NewLimiter`.
    pub async fn load(pool: PgPool) -> Result<Self, indexer_store::StoreError> {
        let known = Pds::all(&pool).await?;
        let mut limiters = HashMap::with_capacity(known.len());
        for pds in known {
            let rate = if pds.crawl_limit > 0 {
                pds.crawl_limit as u32
            } else {
                DEFAULT_RATE_LIMIT
            };
            limiters.insert(pds.host, limiter_for_rate(rate));
        }
        Ok(Self {
            pool,
            limiters: RwLock::new(limiters),
        })
    }

    async fn get_or_insert_default(&self, host: &str) -> Arc<HostLimiter> {
        if let Some(existing) = self.limiters.read().await.get(host) {
            return existing.clone();
        }
        let mut limiters = self.limiters.write().await;
        limiters
            .entry(host.to_string())
            .or_insert_with(|| limiter_for_rate(DEFAULT_RATE_LIMIT))
            .clone()
    }

    /// Blocks (cooperatively, via `tokio::time::sleep` internally) until a
    /// token is available for `host`, creating a default-rate limiter for
    /// hosts never seen before.
    pub async fn wait(&self, host: &str) {
        let limiter = self.get_or_insert_default(host).await;
        limiter.until_ready().await;
    }

    /// Replaces the live limiter for `host` and persists the new rate to
    /// its `pds` row.
    pub async fn set_limit(&self, host: &str, rate: u32) {
        {
            let mut limiters = self.limiters.write().await;
            limiters.insert(host.to_string(), limiter_for_rate(rate));
        }
        if let Err(err) = Pds::set_crawl_limit(&self.pool, host, rate as i32).await {
            tracing::error!(%host, %err, "failed to persist rate limit change");
        }
    }

    /// Replaces every currently-known host's limiter with `rate` and
    /// persists it to each of their rows.
    pub async fn set_all_limits(&self, rate: u32) {
        let hosts: Vec<String> = self.limiters.read().await.keys().cloned().collect();
        for host in hosts {
            self.set_limit(&host, rate).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_is_double_the_rate() {
        let limiter = limiter_for_rate(5);
        // Five tokens should be immediately available (burst = 10, but we
        // only assert the first five succeed without waiting).
        for _ in 0..5 {
            assert!(limiter.check().is_ok());
        }
    }

    #[test]
    fn zero_rate_is_clamped_to_one() {
        // A persisted crawl_limit of 0 (e.g. before any SetLimit call) must
        // not construct an invalid (zero) quota.
        let limiter = limiter_for_rate(0);
        assert!(limiter.check().is_ok());
    }
}
