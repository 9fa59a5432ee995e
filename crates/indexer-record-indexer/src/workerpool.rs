//! Dynamically resizable pool draining the scheduler's dispatch channel,
//! grounded on `cmd/record-indexer/workerpool.go`'s slice of per-worker stop
//! channels. Each worker fetches one repo's full (or since-watermark) CAR,
//! extracts its records, and writes them, following the same seven steps
//! the original's `indexWorker` func performs per item.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use indexer_ratelimit::RateLimiter;
use indexer_registry::RepoRegistry;
use indexer_store::{NewRecord, Repo};
use jacquard_api::com_atproto::sync::get_repo::GetRepoParams;
use jacquard_common::http_client::HttpClient;
use jacquard_common::types::did::Did;
use jacquard_common::xrpc::{build_http_request, CallOptions};
use jacquard_identity::resolver::IdentityResolver;
use jacquard_repo::error::RepoErrorKind;
use sqlx::PgPool;
use tokio::sync::{Mutex, Semaphore};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{IndexerError, Result};
use crate::metrics::Metrics;
use crate::scheduler::WorkItem;

/// Past this response size, a fetch must hold a large-repo ticket before
/// its body is read into memory.
const LARGE_REPO_THRESHOLD_BYTES: usize = 20 * 1024 * 1024;

/// Large-snapshot tickets available pool-wide, so a run of oversized repos
/// can't starve every worker at once.
const MAX_LARGE_REPOS_IN_PARALLEL: usize = 10;

/// `getRepo` is allowed to run this long before the fetch is abandoned;
/// full-repo CARs for very large accounts can take a while even on a
/// generous connection.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Records are written to the store this many at a time per transaction.
const RECORD_BATCH_SIZE: usize = 500;

/// Name of the rate-limit-reset header a 429 response carries. Interpreted
/// as Unix epoch seconds, matching the convention used elsewhere in the
/// stack's XRPC rate-limit headers.
const RESET_HEADER: &str = "ratelimit-reset";

pub struct WorkerPool<R> {
    pool: PgPool,
    http: reqwest::Client,
    registry: Arc<RepoRegistry<R>>,
    rate_limiter: Arc<RateLimiter>,
    metrics: Arc<Metrics>,
    collection_blacklist: Arc<HashSet<String>>,
    large_repo_tickets: Arc<Semaphore>,
    workers: Mutex<Vec<CancellationToken>>,
    input: Arc<Mutex<tokio::sync::mpsc::Receiver<WorkItem>>>,
}

impl<R: IdentityResolver + Sync + Send + 'static> WorkerPool<R> {
    pub fn new(
        pool: PgPool,
        http: reqwest::Client,
        registry: Arc<RepoRegistry<R>>,
        rate_limiter: Arc<RateLimiter>,
        metrics: Arc<Metrics>,
        collection_blacklist: HashSet<String>,
        input: tokio::sync::mpsc::Receiver<WorkItem>,
    ) -> Self {
        Self {
            pool,
            http,
            registry,
            rate_limiter,
            metrics,
            collection_blacklist: Arc::new(collection_blacklist),
            large_repo_tickets: Arc::new(Semaphore::new(MAX_LARGE_REPOS_IN_PARALLEL)),
            workers: Mutex::new(Vec::new()),
            input: Arc::new(Mutex::new(input)),
        }
    }

    /// Grows or shrinks the live worker count to `n`, mirroring the
    /// original's `Resize`: growing spawns new workers, shrinking cancels
    /// the excess (each finishes its in-flight item before exiting).
    pub async fn resize(&self, n: usize) {
        let mut workers = self.workers.lock().await;
        match n.cmp(&workers.len()) {
            std::cmp::Ordering::Greater => {
                let to_add = n - workers.len();
                for _ in 0..to_add {
                    let cancel = CancellationToken::new();
                    workers.push(cancel.clone());
                    self.spawn_worker(cancel);
                }
            }
            std::cmp::Ordering::Less => {
                for cancel in workers.drain(n..) {
                    cancel.cancel();
                }
            }
            std::cmp::Ordering::Equal => {}
        }
        self.metrics.workers_count.set(workers.len() as f64);
        info!(workers = workers.len(), "worker pool resized");
    }

    fn spawn_worker(&self, cancel: CancellationToken) {
        let pool = self.pool.clone();
        let http = self.http.clone();
        let registry = self.registry.clone();
        let rate_limiter = self.rate_limiter.clone();
        let metrics = self.metrics.clone();
        let blacklist = self.collection_blacklist.clone();
        let tickets = self.large_repo_tickets.clone();
        let input = self.input.clone();
        tokio::spawn(async move {
            loop {
                let item = {
                    tokio::select! {
                        _ = cancel.cancelled() => return,
                        item = async { input.lock().await.recv().await } => item,
                    }
                };
                let Some(item) = item else {
                    // Dispatch channel closed: scheduler is gone, nothing
                    // left for this worker to do.
                    return;
                };
                let did = item.repo.did.clone();
                if let Err(err) = index_one(
                    &pool,
                    &http,
                    registry.as_ref(),
                    &rate_limiter,
                    &metrics,
                    &blacklist,
                    &tickets,
                    &item.repo,
                )
                .await
                {
                    warn!(%did, %err, "failed to index repo");
                }
                drop(item.done);
            }
        });
    }
}

/// Runs all seven steps of the original's per-item worker logic for a
/// single repo, recording the outcome to the store either way.
async fn index_one<R: IdentityResolver + Sync>(
    pool: &PgPool,
    http: &reqwest::Client,
    registry: &RepoRegistry<R>,
    rate_limiter: &RateLimiter,
    metrics: &Metrics,
    blacklist: &HashSet<String>,
    large_repo_tickets: &Semaphore,
    repo: &Repo,
) -> Result<()> {
    let result = index_one_inner(pool, http, registry, rate_limiter, metrics, blacklist, large_repo_tickets, repo).await;
    match &result {
        Ok(new_rev) => {
            Repo::record_attempt(pool, repo.id, new_rev.as_deref(), None).await?;
            metrics.repos_indexed_count.with_label_values(&["true"]).inc();
        }
        Err(err) => {
            Repo::record_attempt(pool, repo.id, None, Some(&err.to_string())).await?;
            metrics.repos_indexed_count.with_label_values(&["false"]).inc();
        }
    }
    result.map(|_| ())
}

/// Returns the repo's new revision on success (`None` when nothing had
/// changed since `last_indexed_rev`, the "zero blocks" case).
async fn index_one_inner<R: IdentityResolver + Sync>(
    pool: &PgPool,
    http: &reqwest::Client,
    registry: &RepoRegistry<R>,
    rate_limiter: &RateLimiter,
    metrics: &Metrics,
    blacklist: &HashSet<String>,
    large_repo_tickets: &Semaphore,
    repo: &Repo,
) -> Result<Option<String>> {
    let did = Did::new_owned(&repo.did).map_err(|e| IndexerError::Fetch {
        did: repo.did.clone(),
        host: String::new(),
        message: format!("repo has malformed did: {e}"),
    })?;

    // Step 1: resolve DID -> PDS endpoint, updating the repo row if it has
    // moved since the row was last touched.
    let doc = registry.resolver().resolve_did_doc_owned(&did).await?;
    let endpoint = doc.pds_endpoint().ok_or_else(|| IndexerError::Fetch {
        did: repo.did.clone(),
        host: String::new(),
        message: "DID document has no PDS service entry".to_string(),
    })?;
    let host = endpoint.as_str().trim_end_matches('/').to_string();
    let pds_row = registry.pds_registry().ensure_exists(&host).await?;
    if pds_row.id != repo.pds {
        indexer_store::Repo::set_pds(pool, repo.id, pds_row.id).await?;
    }

    // Step 2: respect this host's rate limit.
    rate_limiter.wait(&host).await;

    // Step 3: fetch the repo CAR, retrying exactly once on a throttled
    // response that names a reset time.
    let since = repo.last_indexed_rev.as_deref().filter(|s| !s.is_empty());
    let body = match fetch_repo_car(http, &endpoint, &did, since, &host).await {
        Ok(body) => body,
        Err(err) => {
            metrics.repos_fetched_count.with_label_values(&[&host, "false"]).inc();
            return Err(err);
        }
    };

    // Step 4: oversized downloads queue behind a small ticket pool so they
    // can't starve the rest of the workers.
    let _large_repo_permit = if body.len() > LARGE_REPO_THRESHOLD_BYTES {
        Some(
            large_repo_tickets
                .acquire()
                .await
                .expect("semaphore is never closed"),
        )
    } else {
        None
    };
    metrics.repo_fetched_size_bytes.observe(body.len() as f64);

    // Step 5: parse the new rev, treating "zero blocks" (nothing new since
    // `since`) as a successful no-op rather than an error.
    let new_rev = match jacquard_repo::extract::extract_rev(&body).await {
        Ok(rev) => rev,
        Err(err) if since.is_some() && *err.kind() == RepoErrorKind::NotFound => {
            debug!(did = %repo.did, "zero blocks since last indexed rev, nothing new");
            return Ok(None);
        }
        Err(err) => {
            return Err(IndexerError::Extract {
                did: repo.did.clone(),
                message: err.to_string(),
            });
        }
    };

    let extracted = jacquard_repo::extract::extract_records(&body)
        .await
        .map_err(|e| IndexerError::Extract {
            did: repo.did.clone(),
            message: e.to_string(),
        })?;
    metrics.records_fetched_count.inc_by(extracted.len() as f64);

    // Step 6: drop blacklisted collections, then batch-upsert the rest.
    let mut to_upsert = Vec::with_capacity(extracted.len());
    for record in &extracted {
        let Some((collection, rkey)) = record.key.split_once('/') else {
            continue;
        };
        if blacklist.contains(collection) {
            continue;
        }
        to_upsert.push(NewRecord {
            repo: repo.id,
            collection,
            rkey,
            at_rev: &new_rev,
            content: record.json.clone(),
        });
    }
    let mut inserted = 0u64;
    for chunk in to_upsert.chunks(RECORD_BATCH_SIZE) {
        inserted += indexer_store::Record::upsert_batch(pool, chunk).await?;
    }
    metrics.records_inserted_count.inc_by(inserted as f64);

    metrics.repos_fetched_count.with_label_values(&[&host, "true"]).inc();

    // Step 7 (the cursor half): if this host has moved its reset cursor
    // forward since we last looked, bump the watermark so the scheduler
    // sees this repo as caught up.
    if let Some(pds) = indexer_store::Pds::by_id(pool, pds_row.id).await? {
        if pds.first_cursor_since_reset > repo.first_cursor_since_reset {
            indexer_store::Repo::bump_first_cursor_since_reset(pool, repo.id, pds.first_cursor_since_reset).await?;
        }
    }

    Ok(Some(new_rev))
}

/// Builds and sends a raw `getRepo` request, bypassing the XRPC call path
/// so the 429 `Reset` response header is still visible (the call path's
/// `process_response` discards all headers on non-2xx/400/401 status).
async fn fetch_repo_car(
    http: &reqwest::Client,
    base: &url::Url,
    did: &Did<'_>,
    since: Option<&str>,
    host: &str,
) -> Result<bytes::Bytes> {
    let params = GetRepoParams {
        did: did.clone(),
        since: since.map(jacquard_common::CowStr::from),
    };

    let mut retried_once = false;
    loop {
        let request = build_http_request(base, &params, &CallOptions::default()).map_err(|e| IndexerError::Fetch {
            did: did.as_str().to_string(),
            host: host.to_string(),
            message: e.to_string(),
        })?;
        let response = tokio::time::timeout(FETCH_TIMEOUT, http.send_http(request))
            .await
            .map_err(|_| IndexerError::Fetch {
                did: did.as_str().to_string(),
                host: host.to_string(),
                message: "getRepo timed out".to_string(),
            })?
            .map_err(|e| IndexerError::Fetch {
                did: did.as_str().to_string(),
                host: host.to_string(),
                message: e.to_string(),
            })?;

        if response.status().as_u16() == 429 {
            if retried_once {
                return Err(IndexerError::ThrottledTwice {
                    did: did.as_str().to_string(),
                });
            }
            let wait = reset_header_delay(response.headers());
            warn!(%host, ?wait, "getRepo throttled, sleeping until reset");
            tokio::time::sleep(wait).await;
            retried_once = true;
            continue;
        }
        if !response.status().is_success() {
            return Err(IndexerError::Fetch {
                did: did.as_str().to_string(),
                host: host.to_string(),
                message: format!("getRepo returned {}", response.status()),
            });
        }
        return Ok(bytes::Bytes::from(response.into_body()));
    }
}

/// Parses a 429's reset header as Unix epoch seconds and returns the delay
/// until then, clamped to zero if it has already passed.
fn reset_header_delay(headers: &http::HeaderMap) -> Duration {
    let Some(value) = headers.get(RESET_HEADER).and_then(|v| v.to_str().ok()) else {
        return Duration::from_secs(1);
    };
    let Ok(reset_epoch) = value.trim().parse::<i64>() else {
        return Duration::from_secs(1);
    };
    let now = chrono::Utc::now().timestamp();
    let delta = reset_epoch - now;
    if delta <= 0 {
        Duration::from_secs(0)
    } else {
        Duration::from_secs(delta as u64)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_did() -> Did<'static> {
        Did::new_owned("did:plc:aaaaaaaaaaaaaaaaaaaaaaaa").unwrap()
    }

    #[test]
    fn reset_header_delay_defaults_without_header() {
        let headers = http::HeaderMap::new();
        assert_eq!(reset_header_delay(&headers), Duration::from_secs(1));
    }

    #[test]
    fn reset_header_delay_clamps_past_timestamps_to_zero() {
        let mut headers = http::HeaderMap::new();
        headers.insert(RESET_HEADER, "1".parse().unwrap());
        assert_eq!(reset_header_delay(&headers), Duration::from_secs(0));
    }

    #[tokio::test]
    async fn fetch_repo_car_retries_once_after_429_then_succeeds() {
        let server = MockServer::start().await;
        let reset_at = chrono::Utc::now().timestamp();

        Mock::given(method("GET"))
            .and(path("/xrpc/com.atproto.sync.getRepo"))
            .respond_with(ResponseTemplate::new(429).insert_header(RESET_HEADER, reset_at.to_string().as_str()))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/xrpc/com.atproto.sync.getRepo"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"car-bytes".to_vec()))
            .mount(&server)
            .await;

        let http = reqwest::Client::new();
        let base = url::Url::parse(&server.uri()).unwrap();
        let did = test_did();
        let bytes = fetch_repo_car(&http, &base, &did, None, &server.uri()).await.unwrap();
        assert_eq!(bytes.as_ref(), b"car-bytes");
    }

    #[tokio::test]
    async fn fetch_repo_car_gives_up_after_second_429() {
        let server = MockServer::start().await;
        let reset_at = chrono::Utc::now().timestamp();

        Mock::given(method("GET"))
            .and(path("/xrpc/com.atproto.sync.getRepo"))
            .respond_with(ResponseTemplate::new(429).insert_header(RESET_HEADER, reset_at.to_string().as_str()))
            .mount(&server)
            .await;

        let http = reqwest::Client::new();
        let base = url::Url::parse(&server.uri()).unwrap();
        let did = test_did();
        let err = fetch_repo_car(&http, &base, &did, None, &server.uri()).await.unwrap_err();
        assert!(matches!(err, IndexerError::ThrottledTwice { .. }));
    }

    #[tokio::test]
    async fn fetch_repo_car_surfaces_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/xrpc/com.atproto.sync.getRepo"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let http = reqwest::Client::new();
        let base = url::Url::parse(&server.uri()).unwrap();
        let did = test_did();
        let err = fetch_repo_car(&http, &base, &did, None, &server.uri()).await.unwrap_err();
        assert!(matches!(err, IndexerError::Fetch { .. }));
    }
}
