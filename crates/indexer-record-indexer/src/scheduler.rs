//! Fill-and-drain queue of repos due for backfill, grounded on
//! `cmd/record-indexer/scheduler.go`'s two in-memory maps
//! (`queue`/`inProgress`) plus a periodic `fillQueue`.
//!
//! The original's `select` over "publish next item" / "receive done
//! signal" / "tick to refill" becomes a non-blocking drain of the queue
//! into a bounded `mpsc` channel (capacity = readiness, same role as the
//! original checking `len(out) < cap(out)` before a blocking send) wrapped
//! around a `tokio::select!` for the timer and the done-signal channel.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use indexer_store::{Pds, Repo};
use sqlx::PgPool;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::metrics::Metrics;

/// Queue refill runs at startup and on this interval thereafter.
const REFILL_INTERVAL: Duration = Duration::from_secs(60);

/// Queue is topped back up whenever it drops below this size.
const LOW_WATERMARK: usize = 30_000;

/// Queue is never grown past this size regardless of how many repos are due.
const HARD_CEILING: usize = 300_000;

/// Capacity of the channel workers pull `WorkItem`s from; bounds how far
/// ahead of the worker pool the scheduler can race.
const DISPATCH_CHANNEL_CAPACITY: usize = 256;

/// Fires (via `Drop`) to tell the scheduler a work item has finished,
/// mirroring the original's `close(done)` — the signal goes out however the
/// worker's handling of the item returns, success or error.
pub struct DoneSignal {
    did: String,
    tx: mpsc::UnboundedSender<String>,
}

impl Drop for DoneSignal {
    fn drop(&mut self) {
        let _ = self.tx.send(std::mem::take(&mut self.did));
    }
}

/// One repo handed to a worker, paired with the signal it must hold (and
/// drop) for the duration of the fetch.
pub struct WorkItem {
    pub repo: Repo,
    pub done: DoneSignal,
}

pub struct Scheduler {
    pool: PgPool,
    metrics: Arc<Metrics>,
}

impl Scheduler {
    pub fn new(pool: PgPool, metrics: Arc<Metrics>) -> Self {
        Self { pool, metrics }
    }

    /// Runs the fill/dispatch loop forever, returning the receiving half of
    /// the dispatch channel for the worker pool to drain.
    pub fn spawn(self: Arc<Self>, cancel: CancellationToken) -> mpsc::Receiver<WorkItem> {
        let (out_tx, out_rx) = mpsc::channel(DISPATCH_CHANNEL_CAPACITY);
        tokio::spawn(async move { self.run(out_tx, cancel).await });
        out_rx
    }

    async fn run(&self, out_tx: mpsc::Sender<WorkItem>, cancel: CancellationToken) {
        info!("scheduler starting");
        let mut queue: VecDeque<Repo> = VecDeque::new();
        let mut queued: HashSet<String> = HashSet::new();
        let mut in_progress: HashSet<String> = HashSet::new();
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<String>();

        self.fill_queue(&mut queue, &mut queued, &in_progress).await;
        self.report_queue_metrics(&queue, &in_progress);

        let mut refill = tokio::time::interval(REFILL_INTERVAL);
        refill.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The startup fill above counts as the first tick.
        refill.reset();

        loop {
            // Drain as much of the queue as the dispatch channel has room
            // for, without blocking the select below on a full channel.
            while let Some(repo) = queue.front() {
                let Ok(permit) = out_tx.try_reserve() else {
                    break;
                };
                let repo = queue.pop_front().expect("front just checked Some");
                queued.remove(&repo.did);
                in_progress.insert(repo.did.clone());
                permit.send(WorkItem {
                    done: DoneSignal {
                        did: repo.did.clone(),
                        tx: done_tx.clone(),
                    },
                    repo,
                });
            }
            self.report_queue_metrics(&queue, &in_progress);

            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("scheduler stopped (cancelled)");
                    return;
                }
                _ = refill.tick() => {
                    if queue.len() < LOW_WATERMARK {
                        self.fill_queue(&mut queue, &mut queued, &in_progress).await;
                    }
                }
                Some(did) = done_rx.recv() => {
                    in_progress.remove(&did);
                }
            }
        }
    }

    fn report_queue_metrics(&self, queue: &VecDeque<Repo>, in_progress: &HashSet<String>) {
        self.metrics.repos_queued_count.set(queue.len() as f64);
        self.metrics.queue_length.with_label_values(&["queued"]).set(queue.len() as f64);
        self.metrics
            .queue_length
            .with_label_values(&["in_progress"])
            .set(in_progress.len() as f64);
    }

    /// Tops the queue up from every enabled PDS, split into roughly
    /// size-balanced batches so one oversized host can't starve the others,
    /// skipping anything already queued or mid-fetch.
    async fn fill_queue(
        &self,
        queue: &mut VecDeque<Repo>,
        queued: &mut HashSet<String>,
        in_progress: &HashSet<String>,
    ) {
        let hosts = match Pds::enabled(&self.pool).await {
            Ok(hosts) => hosts,
            Err(err) => {
                warn!(%err, "failed to list enabled PDSes for queue fill");
                return;
            }
        };
        if hosts.is_empty() {
            return;
        }

        let remaining_room = HARD_CEILING.saturating_sub(queue.len());
        if remaining_room == 0 {
            debug!(ceiling = HARD_CEILING, "scheduler queue at hard ceiling, skipping fill");
            return;
        }
        let per_host_budget = (remaining_room / hosts.len()).max(1) as i64;

        let mut added = 0usize;
        for host in &hosts {
            if queue.len() >= HARD_CEILING {
                break;
            }
            let due = match Repo::due_for_fetch(&self.pool, host.id, per_host_budget).await {
                Ok(due) => due,
                Err(err) => {
                    warn!(host = %host.host, %err, "failed to query repos due for fetch");
                    continue;
                }
            };
            for repo in due {
                if queue.len() >= HARD_CEILING {
                    break;
                }
                if queued.contains(&repo.did) || in_progress.contains(&repo.did) {
                    continue;
                }
                queued.insert(repo.did.clone());
                queue.push_back(repo);
                added += 1;
            }
        }
        debug!(queue_len = queue.len(), scanned_hosts = hosts.len(), added, "scheduler queue filled");
    }
}
