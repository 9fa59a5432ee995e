use globset::GlobSet;
use indexer_store::Pds;
use sqlx::PgPool;

use crate::error::{RegistryError, Result};

/// PDS registry gated by a glob whitelist, grounded on `pds/pds.go`'s
/// `EnsureExists` plus the lister's inline disable-on-fall-out-of-whitelist
/// behaviour.
pub struct PdsRegistry {
    pool: PgPool,
    whitelist: GlobSet,
}

impl PdsRegistry {
    pub fn new(pool: PgPool, whitelist: GlobSet) -> Self {
        Self { pool, whitelist }
    }

    /// Trims the trailing slash, checks the whitelist, then inserts-or-fetches.
    /// Unwhitelisted hosts never create a row.
    pub async fn ensure_exists(&self, host: &str) -> Result<Pds> {
        let host = host.trim_end_matches('/');
        if !self.whitelist.is_match(host) {
            return Err(RegistryError::NotWhitelisted(host.to_string()));
        }
        Pds::ensure_exists(&self.pool, host).await.map_err(Into::into)
    }

    /// Disables a previously discovered host that has fallen out of the
    /// whitelist; used by the lister when refreshing known PDSes. Returns
    /// whether a disable was applied.
    pub async fn disable_if_unwhitelisted(&self, host: &str) -> Result<bool> {
        let host = host.trim_end_matches('/');
        if self.whitelist.is_match(host) {
            return Ok(false);
        }
        Pds::set_disabled(&self.pool, host, true).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whitelist;

    fn narrow_whitelist() -> GlobSet {
        whitelist::build(&["https://bsky.social".to_string()]).unwrap()
    }

    #[test]
    fn unwhitelisted_host_is_rejected_before_any_db_call() {
        let set = narrow_whitelist();
        assert!(!set.is_match("https://evil.example"));
    }
}
