//! Per-PDS `subscribeRepos` consumer.
//!
//! One [`Consumer`] owns exactly one host's websocket connection. Frames are
//! dispatched by their `t` discriminator; `#commit` is the hot path and the
//! only one that touches the MST extractor. Every other named type updates
//! bookkeeping and advances the cursor without pulling apart the CAR.

use std::sync::Arc;
use std::time::Instant;

use indexer_registry::RepoRegistry;
use indexer_store::{BadRecord, NewRecord, Pds, Record, Repo};
use jacquard_common::types::did::Did;
use jacquard_common::websocket::tungstenite_client::TungsteniteClient;
use jacquard_common::websocket::WebSocketClient;
use jacquard_common::xrpc::subscription::parse_event_header;
use jacquard_identity::resolver::IdentityResolver;
use n0_future::StreamExt;
use sqlx::PgPool;
use tracing::{debug, error, info, warn};

use crate::error::{FirehoseError, Result};
use crate::events::{ErrorBody, HandleBody, IdentityBody, InfoBody, MigrateBody, TombstoneBody};
use crate::metrics::Metrics;
use crate::{ResolverCache, BAD_FRAME_CAP, CURSOR_PERSIST_DELTA, CURSOR_PERSIST_INTERVAL, IDLE_TIMEOUT, RECONNECT_DELAY};

pub struct Consumer<R> {
    pool: PgPool,
    registry: Arc<RepoRegistry<R>>,
    metrics: Arc<Metrics>,
    client: TungsteniteClient,
}

impl<R: IdentityResolver + ResolverCache + Sync> Consumer<R> {
    pub fn new(pool: PgPool, registry: Arc<RepoRegistry<R>>, metrics: Arc<Metrics>) -> Self {
        Self {
            pool,
            registry,
            metrics,
            client: TungsteniteClient::new(),
        }
    }

    /// Runs until cancelled, reconnecting after any recoverable error and
    /// returning only once a condition the supervisor can't paper over
    /// (too many bad frames, a fatal server error frame) has occurred.
    pub async fn run(&self, pds_id: indexer_store::Id, host: String, cancel: tokio_util::sync::CancellationToken) -> Result<()> {
        loop {
            if cancel.is_cancelled() {
                return Ok(());
            }
            match self.run_once(pds_id, &host, &cancel).await {
                Ok(()) => return Ok(()),
                Err(err @ (FirehoseError::BadFrameCapExceeded { .. } | FirehoseError::ServerError { .. })) => {
                    error!(%host, %err, "firehose consumer hit a fatal condition");
                    return Err(err);
                }
                Err(err) => {
                    self.metrics.connection_failures.with_label_values(&[&host]).inc();
                    self.metrics.connection_up.with_label_values(&[&host]).set(0.0);
                    warn!(%host, %err, "firehose connection dropped, reconnecting");
                    tokio::select! {
                        _ = cancel.cancelled() => return Ok(()),
                        _ = tokio::time::sleep(RECONNECT_DELAY) => {}
                    }
                }
            }
        }
    }

    /// One connection lifetime: connect, stream frames until the connection
    /// drops, the idle watchdog fires, or a fatal condition is hit.
    async fn run_once(&self, pds_id: indexer_store::Id, host: &str, cancel: &tokio_util::sync::CancellationToken) -> Result<()> {
        let pds = Pds::by_host(&self.pool, host)
            .await?
            .ok_or_else(|| FirehoseError::Stream(format!("PDS {host} disappeared mid-connect")))?;

        let url = build_subscribe_url(host, pds.cursor)?;
        info!(%host, cursor = pds.cursor, "connecting to firehose");

        let conn = self.client.connect(url).await.map_err(|e| FirehoseError::Connect {
            host: host.to_string(),
            message: e.to_string(),
        })?;
        self.metrics.connection_up.with_label_values(&[host]).set(1.0);
        let (_tx, mut rx) = conn.split();

        let mut first_frame = true;
        let mut bad_frames = BadRecord::count_for_pds(&self.pool, pds_id).await?;
        let mut persisted_cursor = pds.cursor;
        let mut persisted_at = Instant::now();

        loop {
            let next = tokio::select! {
                _ = cancel.cancelled() => return Ok(()),
                msg = tokio::time::timeout(IDLE_TIMEOUT, rx.next()) => msg,
            };
            let Ok(msg) = next else {
                return Err(FirehoseError::IdleTimeout);
            };
            let Some(msg) = msg else {
                return Err(FirehoseError::Stream("stream ended".to_string()));
            };
            let msg = msg.map_err(|e| FirehoseError::Stream(e.to_string()))?;
            let Some(bytes) = msg.as_bytes() else {
                continue;
            };

            match self.process_frame(pds_id, host, bytes, &mut first_frame, persisted_cursor).await {
                Ok(Some(seq)) => {
                    let due = (seq - persisted_cursor).abs() >= CURSOR_PERSIST_DELTA
                        || persisted_at.elapsed() >= CURSOR_PERSIST_INTERVAL;
                    if due {
                        Pds::set_cursor(&self.pool, pds_id, seq).await?;
                        persisted_cursor = seq;
                        persisted_at = Instant::now();
                    }
                    self.metrics
                        .commit_received_timestamp
                        .with_label_values(&[host])
                        .set(chrono::Utc::now().timestamp() as f64);
                }
                Ok(None) => {}
                Err(FirehoseError::ServerError { error, message }) => {
                    return Err(FirehoseError::ServerError { error, message });
                }
                Err(err) => {
                    warn!(%host, %err, "bad firehose frame, quarantining");
                    BadRecord::insert(&self.pool, pds_id, pds.cursor, &err.to_string(), bytes).await?;
                    bad_frames += 1;
                    if bad_frames > BAD_FRAME_CAP {
                        return Err(FirehoseError::BadFrameCapExceeded { cap: BAD_FRAME_CAP });
                    }
                }
            }
        }
    }

    /// Decodes and applies one frame. Returns the frame's sequence number on
    /// success so the caller can advance the persisted cursor; `None` for
    /// frame types that carry no sequence number of their own (`#info`).
    ///
    /// `persisted_cursor` is the last sequence number this connection wrote
    /// to `pds.cursor`; it's used to detect a server-side reset on the first
    /// commit frame seen after connecting or after an `OutdatedCursor`
    /// `#info` frame, per spec.md's "first-frame reset check".
    async fn process_frame(
        &self,
        pds_id: indexer_store::Id,
        host: &str,
        bytes: &[u8],
        first_frame: &mut bool,
        persisted_cursor: i64,
    ) -> Result<Option<i64>> {
        let (header, body) =
            parse_event_header(bytes).map_err(|e| FirehoseError::Stream(format!("bad frame header: {e}")))?;

        if header.op == -1 {
            let err: ErrorBody =
                ciborium::de::from_reader(body).map_err(|e| FirehoseError::Stream(format!("bad error frame: {e}")))?;
            return Err(FirehoseError::ServerError {
                error: err.error,
                message: err.message,
            });
        }

        self.metrics.commits_received.with_label_values(&[host, header.t.as_str()]).inc();

        if header.t.as_str() == "#info" {
            let info: InfoBody =
                ciborium::de::from_reader(body).map_err(|e| FirehoseError::Stream(format!("bad #info body: {e}")))?;
            if info.is_outdated_cursor() {
                warn!(%host, "server reports our cursor is outdated, next commit starts a fresh reset");
                *first_frame = true;
            }
            return Ok(None);
        }

        let seq = match header.t.as_str() {
            "#commit" => {
                let commit: jacquard_repo::commit::firehose::FirehoseCommit =
                    serde_ipld_dagcbor::from_slice(body)
                        .map_err(|e| FirehoseError::Stream(format!("bad #commit body: {e}")))?;
                let seq = commit.seq;
                if *first_frame {
                    *first_frame = false;
                    if seq != persisted_cursor + 1 {
                        warn!(%host, seq, persisted_cursor, "stream reset detected on first frame, recording new first_cursor_since_reset");
                        Pds::set_first_cursor_since_reset(&self.pool, pds_id, seq).await?;
                    } else {
                        debug!(%host, seq, "first commit frame on this connection, cursor contiguous");
                    }
                }
                self.apply_commit(pds_id, host, commit).await?;
                seq
            }
            "#identity" => {
                let body: IdentityBody = ciborium::de::from_reader(body)
                    .map_err(|e| FirehoseError::Stream(format!("bad #identity body: {e}")))?;
                self.registry.resolver().flush_cache_for(&body.did);
                body.seq
            }
            "#account" => {
                #[derive(serde::Deserialize)]
                struct AccountBody<'a> {
                    #[serde(borrow)]
                    did: Did<'a>,
                    seq: i64,
                    active: bool,
                }
                let body: AccountBody =
                    ciborium::de::from_reader(body).map_err(|e| FirehoseError::Stream(format!("bad #account body: {e}")))?;
                if !body.active {
                    Repo::tombstone(&self.pool, body.did.as_str()).await?;
                }
                body.seq
            }
            "#handle" => {
                let body: HandleBody =
                    ciborium::de::from_reader(body).map_err(|e| FirehoseError::Stream(format!("bad #handle body: {e}")))?;
                body.seq
            }
            "#migrate" => {
                let body: MigrateBody =
                    ciborium::de::from_reader(body).map_err(|e| FirehoseError::Stream(format!("bad #migrate body: {e}")))?;
                body.seq
            }
            "#tombstone" => {
                let body: TombstoneBody =
                    ciborium::de::from_reader(body).map_err(|e| FirehoseError::Stream(format!("bad #tombstone body: {e}")))?;
                Repo::tombstone(&self.pool, body.did.as_str()).await?;
                body.seq
            }
            "#sync" => {
                #[derive(serde::Deserialize)]
                struct SyncBody {
                    seq: i64,
                }
                let body: SyncBody =
                    ciborium::de::from_reader(body).map_err(|e| FirehoseError::Stream(format!("bad #sync body: {e}")))?;
                body.seq
            }
            other => {
                warn!(%host, kind = other, "unrecognized firehose frame type, skipping");
                return Err(FirehoseError::Stream(format!("unknown frame type {other}")));
            }
        };

        Ok(Some(seq))
    }

    /// Applies one `#commit` frame's record operations, following the seven
    /// steps a commit frame is processed in: PDS-change detection, watermark
    /// bookkeeping, op application, and cursor-side reconciliation.
    async fn apply_commit(
        &self,
        pds_id: indexer_store::Id,
        host: &str,
        commit: jacquard_repo::commit::firehose::FirehoseCommit<'_>,
    ) -> Result<()> {
        let did = commit.repo.clone();
        let rev = commit.rev.to_string();

        let (repo, _created) = self.registry.ensure_exists(&did).await?;

        if repo.pds != pds_id {
            // The repo row disagrees with the host this frame arrived on;
            // re-resolve rather than trust either side blindly.
            let doc = self.registry.resolver().resolve_did_doc_owned(&did).await;
            match doc {
                Ok(doc) => {
                    if let Some(endpoint) = doc.pds_endpoint() {
                        let resolved = self.registry.pds_registry().ensure_exists(endpoint.as_str()).await?;
                        if resolved.id != pds_id {
                            Repo::set_pds(&self.pool, repo.id, resolved.id).await?;
                            debug!(did = %did, %host, "repo moved off this PDS, skipping commit");
                            return Ok(());
                        }
                    }
                    Repo::set_pds(&self.pool, repo.id, pds_id).await?;
                }
                Err(err) => {
                    warn!(did = %did, %err, "failed to resolve DID while reconciling PDS mismatch");
                    return Ok(());
                }
            }
        }

        Repo::set_first_rev_since_reset(&self.pool, did.as_str(), &rev).await?;

        let extracted = jacquard_repo::extract::extract_records(&commit.blocks)
            .await
            .map_err(|e| FirehoseError::Stream(format!("CAR extraction failed: {e}")))?;
        let mut by_key: std::collections::HashMap<String, jacquard_repo::extract::ExtractedRecord> =
            extracted.into_iter().map(|r| (r.key.clone(), r)).collect();

        let mut to_upsert = Vec::new();
        for op in &commit.ops {
            let Some((collection, rkey)) = op.path.split_once('/') else {
                continue;
            };
            match op.action.as_ref() {
                "delete" => {
                    Record::mark_deleted(&self.pool, repo.id, collection, rkey, &rev).await?;
                }
                "create" | "update" => {
                    if let Some(found) = by_key.remove(op.path.as_ref()) {
                        to_upsert.push(NewRecord {
                            repo: repo.id,
                            collection,
                            rkey,
                            at_rev: &rev,
                            content: found.json,
                        });
                    }
                }
                other => warn!(action = other, path = %op.path, "unrecognized repo op action"),
            }
        }
        Record::upsert_batch(&self.pool, &to_upsert).await?;

        Repo::set_last_firehose_rev(&self.pool, repo.id, &rev).await?;

        if commit.too_big {
            let pds = Pds::by_host(&self.pool, host).await?.ok_or_else(|| {
                FirehoseError::Stream(format!("PDS {host} disappeared mid-commit"))
            })?;
            Repo::reset_watermark(&self.pool, repo.id, &rev, pds.first_cursor_since_reset).await?;
        }

        let pds_row = Pds::by_host(&self.pool, host).await?;
        if let Some(pds_row) = pds_row {
            if repo.first_cursor_since_reset != pds_row.first_cursor_since_reset {
                Repo::bump_first_cursor_since_reset(&self.pool, repo.id, pds_row.first_cursor_since_reset).await?;
            }
        }

        Ok(())
    }
}

/// Builds the `subscribeRepos` websocket URL for a host at a given cursor,
/// mirroring `ws(s)://<host>/xrpc/com.atproto.sync.subscribeRepos?cursor=N`.
/// A zero cursor means "from the beginning" and is still sent explicitly, as
/// relying on server-side defaulting risks skipping the reset-detection path.
fn build_subscribe_url(host: &str, cursor: i64) -> Result<url::Url> {
    let base = url::Url::parse(host)
        .map_err(|e| FirehoseError::Stream(format!("invalid PDS host {host}: {e}")))?;
    let scheme = if base.scheme() == "https" { "wss" } else { "ws" };
    let mut url = base;
    url.set_scheme(scheme)
        .map_err(|_| FirehoseError::Stream(format!("cannot derive ws scheme for {host}")))?;
    url.set_path("/xrpc/com.atproto.sync.subscribeRepos");
    url.query_pairs_mut().append_pair("cursor", &cursor.to_string());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_url_upgrades_https_to_wss() {
        let url = build_subscribe_url("https://bsky.social", 42).unwrap();
        assert_eq!(url.scheme(), "wss");
        assert_eq!(url.path(), "/xrpc/com.atproto.sync.subscribeRepos");
        assert_eq!(url.query(), Some("cursor=42"));
    }

    #[test]
    fn subscribe_url_upgrades_http_to_ws() {
        let url = build_subscribe_url("http://localhost:2583", 0).unwrap();
        assert_eq!(url.scheme(), "ws");
        assert_eq!(url.query(), Some("cursor=0"));
    }

    #[test]
    fn subscribe_url_rejects_garbage_host() {
        assert!(build_subscribe_url("not a url", 0).is_err());
    }
}
