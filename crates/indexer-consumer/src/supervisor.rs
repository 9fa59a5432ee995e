//! Reconciles the set of running per-PDS consumer tasks against the set of
//! enabled, whitelisted PDSes on a fixed interval, grounded on
//! `cmd/consumer/consumer.go`'s main reconciliation loop: spawn one task per
//! host that should be running and isn't, cancel one per host that
//! shouldn't be and is, and respawn any task whose consumer surfaced a fatal
//! error.

use std::collections::HashMap;
use std::sync::Arc;

use indexer_registry::RepoRegistry;
use indexer_store::{Id, Pds};
use jacquard_identity::resolver::IdentityResolver;
use sqlx::PgPool;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::consumer::Consumer;
use crate::metrics::Metrics;
use crate::ResolverCache;

/// How often the supervisor reconciles running consumers against the
/// current PDS set.
const RECONCILE_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

struct Running {
    handle: JoinHandle<()>,
    cancel: CancellationToken,
}

pub struct Supervisor<R> {
    pool: PgPool,
    registry: Arc<RepoRegistry<R>>,
    metrics: Arc<Metrics>,
    running: tokio::sync::Mutex<HashMap<Id, Running>>,
}

impl<R: IdentityResolver + ResolverCache + Sync + Send + 'static> Supervisor<R> {
    pub fn new(pool: PgPool, registry: Arc<RepoRegistry<R>>, metrics: Arc<Metrics>) -> Self {
        Self {
            pool,
            registry,
            metrics,
            running: tokio::sync::Mutex::new(HashMap::new()),
        }
    }

    pub async fn run(self: Arc<Self>, cancel: CancellationToken) {
        info!("firehose supervisor starting");
        loop {
            self.reconcile().await;
            tokio::select! {
                _ = cancel.cancelled() => {
                    self.shutdown().await;
                    info!("firehose supervisor stopped (cancelled)");
                    return;
                }
                _ = tokio::time::sleep(RECONCILE_INTERVAL) => {}
            }
        }
    }

    async fn reconcile(&self) {
        let desired = match Pds::enabled(&self.pool).await {
            Ok(pds) => pds,
            Err(err) => {
                error!(%err, "failed to list enabled PDSes for reconciliation");
                return;
            }
        };
        let desired_ids: std::collections::HashSet<Id> = desired.iter().map(|p| p.id).collect();

        let mut running = self.running.lock().await;

        running.retain(|id, task| {
            if desired_ids.contains(id) && !task.handle.is_finished() {
                return true;
            }
            if !task.handle.is_finished() {
                task.cancel.cancel();
            }
            false
        });

        for pds in desired {
            if running.contains_key(&pds.id) {
                continue;
            }
            info!(host = %pds.host, "starting firehose consumer");
            let cancel = CancellationToken::new();
            let handle = self.spawn_consumer(pds.id, pds.host.clone(), cancel.clone());
            running.insert(pds.id, Running { handle, cancel });
        }
    }

    fn spawn_consumer(&self, pds_id: Id, host: String, cancel: CancellationToken) -> JoinHandle<()> {
        let pool = self.pool.clone();
        let registry = self.registry.clone();
        let metrics = self.metrics.clone();
        tokio::spawn(async move {
            let consumer = Consumer::new(pool, registry, metrics);
            if let Err(err) = consumer.run(pds_id, host.clone(), cancel).await {
                warn!(%host, %err, "firehose consumer exited, will restart on next reconciliation");
            }
        })
    }

    async fn shutdown(&self) {
        let mut running = self.running.lock().await;
        for (_, task) in running.drain() {
            task.cancel.cancel();
            let _ = task.handle.await;
        }
    }
}
