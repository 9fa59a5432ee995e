//! Periodic repo listing loop: refreshes one known PDS's repo set at a
//! time, grounded on `cmd/lister/lister.go`'s single-ticker run loop.
//!
//! Rather than crawling the firehose for discovery, the lister walks
//! `com.atproto.sync.listRepos` for hosts whose listing has gone stale,
//! feeding every DID it sees through the repo registry so new repos get a
//! row (and, on a freshly created row, a watermark matching "nothing
//! indexed yet since this host's current cursor").

pub mod metrics;

use std::time::Duration;

use chrono::Utc;
use indexer_registry::RepoRegistry;
use indexer_store::{Pds, Repo};
use jacquard_api::com_atproto::sync::list_repos::ListReposParams;
use jacquard_common::types::did::Did;
use jacquard_common::xrpc::XrpcExt;
use jacquard_identity::resolver::IdentityResolver;
use sqlx::PgPool;
use tracing::{debug, error, info, warn};

use crate::metrics::Metrics;

/// Page size for `listRepos`, matching the original's `pagination.Reduce`
/// call.
const PAGE_SIZE: i64 = 200;

/// How long a PDS's listing may go unrefreshed before it's due again.
const LIST_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 3600);

/// How often the lister checks for a PDS due for a refresh.
const POLL_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ListerError {
    #[error(transparent)]
    Store(#[from] indexer_store::StoreError),
    #[error(transparent)]
    Registry(#[from] indexer_registry::RegistryError),
    #[error("invalid listRepos response from {host}: {message}")]
    BadResponse { host: String, message: String },
    #[error("fetching page from {host}: {source}")]
    Transport {
        host: String,
        #[source]
        source: jacquard_common::error::ClientError,
    },
}

pub struct Lister<R> {
    pool: PgPool,
    http: reqwest::Client,
    registry: RepoRegistry<R>,
    metrics: Metrics,
}

impl<R: IdentityResolver + Sync> Lister<R> {
    pub fn new(pool: PgPool, http: reqwest::Client, registry: RepoRegistry<R>, metrics: Metrics) -> Self {
        Self {
            pool,
            http,
            registry,
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Blocks forever, listing whichever PDS is next due on a fixed poll
    /// interval, same as the original's single ticker plus immediate
    /// first tick.
    pub async fn run(&self, cancel: tokio_util::sync::CancellationToken) {
        info!("lister starting");
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("lister stopped (cancelled)");
                    return;
                }
                _ = self.tick() => {}
            }
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("lister stopped (cancelled)");
                    return;
                }
                _ = tokio::time::sleep(POLL_INTERVAL) => {}
            }
        }
    }

    async fn tick(&self) {
        let due = match Pds::next_due_for_listing(&self.pool, chrono::Duration::from_std(LIST_REFRESH_INTERVAL).unwrap()).await {
            Ok(due) => due,
            Err(err) => {
                error!(%err, "failed to query DB for a PDS to list repos from");
                return;
            }
        };
        let Some(remote) = due else {
            return;
        };
        if let Err(err) = self.list_one(&remote).await {
            error!(host = %remote.host, %err, "failed to list repos");
        }
        if let Err(err) = Pds::stamp_last_list(&self.pool, remote.id).await {
            error!(host = %remote.host, %err, "failed to update last_list timestamp");
        }
    }

    async fn list_one(&self, remote: &Pds) -> Result<(), ListerError> {
        info!(host = %remote.host, "listing repos");

        // A host that has fallen out of the whitelist since it was first
        // discovered is disabled right here rather than waiting for some
        // separate sweep.
        match self.registry.pds_registry().disable_if_unwhitelisted(&remote.host).await {
            Ok(true) => {
                warn!(host = %remote.host, "disabled PDS, no longer whitelisted");
                return Ok(());
            }
            Ok(false) => {}
            Err(err) => {
                error!(host = %remote.host, %err, "failed to check whitelist status");
            }
        }

        let base = url::Url::parse(&remote.host).map_err(|e| ListerError::Transport {
            host: remote.host.clone(),
            source: jacquard_common::error::TransportError::InvalidRequest(e.to_string()).into(),
        })?;

        let dids = list_all_repos(&self.http, &base, &remote.host).await?;
        info!(host = %remote.host, count = dids.len(), "received DIDs");

        for (did_str, rev) in dids {
            let did = match Did::new_owned(&did_str) {
                Ok(did) => did,
                Err(err) => {
                    warn!(did = %did_str, %err, "skipping malformed DID from listRepos");
                    continue;
                }
            };
            match self.registry.ensure_exists(&did).await {
                Ok((repo, created)) => {
                    if created {
                        self.metrics.repos_discovered.with_label_values(&[&remote.host]).inc();
                    }
                    // Every listed repo gets a watermark established if it's
                    // still unset, not only freshly discovered ones: a repo
                    // whose watermark was cleared elsewhere (PDS-mismatch
                    // reconciliation, a too-big commit reset) should pick one
                    // back up the next time this host lists it, without
                    // waiting on a firehose event. `set_watermark_if_unset` is
                    // itself a no-op once the watermark is already set.
                    if let Err(err) = Repo::set_watermark_if_unset(&self.pool, &repo.did, &rev, remote.cursor).await {
                        warn!(did = %repo.did, %err, "failed to set initial watermark");
                    }
                    self.metrics.repos_listed.with_label_values(&[&remote.host]).inc();
                }
                Err(err) => {
                    error!(did = %did_str, %err, "failed to ensure repo exists");
                }
            }
        }

        debug!(host = %remote.host, now = %Utc::now(), "listing pass complete");
        Ok(())
    }
}

/// Walks `com.atproto.sync.listRepos` to exhaustion, following the response
/// cursor until it's absent or empty, same pagination rule as the original's
/// `pagination.Reduce`.
async fn list_all_repos(http: &reqwest::Client, base: &url::Url, host: &str) -> Result<Vec<(String, String)>, ListerError> {
    let mut cursor: Option<String> = None;
    let mut dids: Vec<(String, String)> = Vec::new();
    loop {
        let params = ListReposParams {
            cursor: cursor.as_deref().map(jacquard_common::CowStr::from),
            limit: Some(PAGE_SIZE),
        };
        let resp = http
            .xrpc(base.clone())
            .send(&params)
            .await
            .map_err(|e| ListerError::Transport {
                host: host.to_string(),
                source: e,
            })?;
        let output = resp.parse().map_err(|e| ListerError::BadResponse {
            host: host.to_string(),
            message: e.to_string(),
        })?;

        for repo in &output.repos {
            dids.push((repo.did.as_str().to_string(), repo.rev.to_string()));
        }
        match output.cursor {
            Some(next) if !next.as_ref().is_empty() => cursor = Some(next.to_string()),
            _ => break,
        }
    }
    Ok(dids)
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn list_all_repos_follows_cursor_across_pages() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/xrpc/com.atproto.sync.listRepos"))
            .and(wiremock::matchers::query_param_is_missing("cursor"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "cursor": "page2",
                "repos": [
                    {"did": "did:plc:aaaaaaaaaaaaaaaaaaaaaaaa", "head": "bafyhead1", "rev": "3jzfcijpj2z2a"},
                ],
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/xrpc/com.atproto.sync.listRepos"))
            .and(wiremock::matchers::query_param("cursor", "page2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "cursor": "",
                "repos": [
                    {"did": "did:plc:bbbbbbbbbbbbbbbbbbbbbbbb", "head": "bafyhead2", "rev": "3jzfcijpj2z2b"},
                ],
            })))
            .mount(&server)
            .await;

        let http = reqwest::Client::new();
        let base = url::Url::parse(&server.uri()).unwrap();
        let dids = list_all_repos(&http, &base, &server.uri()).await.unwrap();

        assert_eq!(
            dids,
            vec![
                ("did:plc:aaaaaaaaaaaaaaaaaaaaaaaa".to_string(), "3jzfcijpj2z2a".to_string()),
                ("did:plc:bbbbbbbbbbbbbbbbbbbbbbbb".to_string(), "3jzfcijpj2z2b".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn list_all_repos_surfaces_transport_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/xrpc/com.atproto.sync.listRepos"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let http = reqwest::Client::new();
        let base = url::Url::parse(&server.uri()).unwrap();
        let err = list_all_repos(&http, &base, &server.uri()).await.unwrap_err();
        assert!(matches!(err, ListerError::Transport { .. }) || matches!(err, ListerError::BadResponse { .. }));
    }
}
