use indexer_store::Repo;
use jacquard_common::types::did::Did;
use jacquard_identity::resolver::IdentityResolver;
use sqlx::PgPool;

use crate::error::{RegistryError, Result};
use crate::pds::PdsRegistry;

/// Repo registry grounded on `repo/repo.go`'s `EnsureExists`: resolves a DID
/// to its PDS and signing key, ensures the PDS row, then performs the
/// insert-if-absent dance implemented transactionally in
/// `indexer_store::Repo::ensure_exists`.
pub struct RepoRegistry<R> {
    pool: PgPool,
    pds: PdsRegistry,
    resolver: R,
}

impl<R: IdentityResolver + Sync> RepoRegistry<R> {
    pub fn new(pool: PgPool, pds: PdsRegistry, resolver: R) -> Self {
        Self { pool, pds, resolver }
    }

    /// The inner PDS registry, for callers that need to act on a host
    /// directly (e.g. disabling one that has fallen out of the whitelist).
    pub fn pds_registry(&self) -> &PdsRegistry {
        &self.pds
    }

    /// The inner identity resolver, for callers that need to re-resolve or
    /// invalidate cache entries directly (e.g. on an `#identity` event).
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Returns the repo row and whether this call created it. If the DID
    /// already has a row, the resolver is not consulted at all.
    pub async fn ensure_exists(&self, did: &Did<'_>) -> Result<(Repo, bool)> {
        if let Some(existing) = Repo::by_did(&self.pool, did.as_str()).await? {
            return Ok((existing, false));
        }

        let doc = self.resolver.resolve_did_doc_owned(did).await?;
        let endpoint = doc
            .pds_endpoint()
            .ok_or_else(|| RegistryError::MissingPdsEndpoint {
                did: did.as_str().to_string(),
            })?;
        let pds_row = self.pds.ensure_exists(endpoint.as_str()).await?;
        let key = doc.atproto_multikey();

        Repo::ensure_exists(&self.pool, did.as_str(), pds_row.id, key.as_deref())
            .await
            .map_err(Into::into)
    }
}
