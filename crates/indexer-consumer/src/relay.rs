//! Relay discovery consumer.
//!
//! Subscribes to an aggregating relay's firehose purely to discover
//! previously-unknown PDSes faster than the periodic lister would find
//! them. It never extracts or stores records itself; every event is reduced
//! to "this DID was just active, make sure we know its PDS."

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use indexer_registry::PdsRegistry;
use jacquard_common::types::did::Did;
use jacquard_common::websocket::tungstenite_client::TungsteniteClient;
use jacquard_common::websocket::WebSocketClient;
use jacquard_common::xrpc::subscription::parse_event_header;
use jacquard_identity::resolver::IdentityResolver;
use lru::LruCache;
use n0_future::StreamExt;
use tracing::{debug, warn};

use crate::error::{FirehoseError, Result};
use crate::metrics::Metrics;
use crate::IDLE_TIMEOUT;

/// How many recently-seen DIDs to remember, so a busy relay doesn't trigger
/// a resolver round trip for every single event from the same few accounts.
const SEEN_CACHE_SIZE: usize = 50_000;

pub struct RelayConsumer<R> {
    url: url::Url,
    pds: Arc<PdsRegistry>,
    resolver: R,
    metrics: Arc<Metrics>,
    seen: Mutex<LruCache<String, ()>>,
    client: TungsteniteClient,
}

impl<R: IdentityResolver + Sync> RelayConsumer<R> {
    pub fn new(url: url::Url, pds: Arc<PdsRegistry>, resolver: R, metrics: Arc<Metrics>) -> Self {
        Self {
            url,
            pds,
            resolver,
            metrics,
            seen: Mutex::new(LruCache::new(NonZeroUsize::new(SEEN_CACHE_SIZE).unwrap())),
            client: TungsteniteClient::new(),
        }
    }

    /// Runs until cancelled, reconnecting after every recoverable error;
    /// this consumer keeps no cursor of its own, since it only matters for
    /// discovery and can safely miss events between reconnects.
    pub async fn run(&self, cancel: tokio_util::sync::CancellationToken) {
        loop {
            if cancel.is_cancelled() {
                return;
            }
            if let Err(err) = self.run_once(&cancel).await {
                warn!(relay = %self.url, %err, "relay consumer connection dropped, reconnecting");
                tokio::select! {
                    _ = cancel.cancelled() => return,
                    _ = tokio::time::sleep(crate::RECONNECT_DELAY) => {}
                }
            }
        }
    }

    async fn run_once(&self, cancel: &tokio_util::sync::CancellationToken) -> Result<()> {
        let conn = self.client.connect(self.url.clone()).await.map_err(|e| FirehoseError::Connect {
            host: self.url.to_string(),
            message: e.to_string(),
        })?;
        let (_tx, mut rx) = conn.split();

        loop {
            let next = tokio::select! {
                _ = cancel.cancelled() => return Ok(()),
                msg = tokio::time::timeout(IDLE_TIMEOUT, rx.next()) => msg,
            };
            let Ok(msg) = next else {
                return Err(FirehoseError::IdleTimeout);
            };
            let Some(msg) = msg else {
                return Err(FirehoseError::Stream("relay stream ended".to_string()));
            };
            let msg = msg.map_err(|e| FirehoseError::Stream(e.to_string()))?;
            let Some(bytes) = msg.as_bytes() else {
                continue;
            };
            if let Err(err) = self.process_frame(bytes).await {
                debug!(relay = %self.url, %err, "skipping undecodable relay frame");
            }
        }
    }

    async fn process_frame(&self, bytes: &[u8]) -> Result<()> {
        let (header, body) =
            parse_event_header(bytes).map_err(|e| FirehoseError::Stream(format!("bad frame header: {e}")))?;
        if header.op != 1 {
            return Ok(());
        }
        let did = match header.t.as_str() {
            "#commit" | "#identity" | "#account" => {
                #[derive(serde::Deserialize)]
                struct DidOnly<'a> {
                    #[serde(borrow)]
                    did: Did<'a>,
                }
                let body: DidOnly =
                    ciborium::de::from_reader(body).map_err(|e| FirehoseError::Stream(format!("bad body: {e}")))?;
                body.did.as_str().to_string()
            }
            _ => return Ok(()),
        };

        if self.seen.lock().unwrap().put(did.clone(), ()).is_some() {
            return Ok(());
        }

        let Ok(did) = Did::new_owned(&did) else {
            return Ok(());
        };
        let Ok(doc) = self.resolver.resolve_did_doc_owned(&did).await else {
            return Ok(());
        };
        let Some(endpoint) = doc.pds_endpoint() else {
            return Ok(());
        };
        if let Ok(pds) = self.pds.ensure_exists(endpoint.as_str()).await {
            self.metrics.repos_discovered.with_label_values(&[&pds.host]).inc();
        }
        Ok(())
    }
}
