//! Prometheus metrics for the scheduler and worker pool, grounded on
//! `cmd/record-indexer/metrics.go`.

use prometheus::{CounterVec, Gauge, GaugeVec, Histogram, HistogramOpts, Opts, Registry};

pub struct Metrics {
    pub repos_queued_count: Gauge,
    pub queue_length: GaugeVec,
    pub repos_fetched_count: CounterVec,
    pub repos_indexed_count: CounterVec,
    pub records_fetched_count: prometheus::Counter,
    pub records_inserted_count: prometheus::Counter,
    pub workers_count: Gauge,
    pub repo_fetched_size_bytes: Histogram,
    registry: Registry,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let repos_queued_count = Gauge::new(
            "indexer_repos_queued_count",
            "Number of repos currently sitting in the scheduler's queue.",
        )
        .expect("static metric options are valid");
        let queue_length = GaugeVec::new(
            Opts::new("indexer_queue_length", "Size of the scheduler's internal maps."),
            &["state"],
        )
        .expect("static metric options are valid");
        let repos_fetched_count = CounterVec::new(
            Opts::new("indexer_repos_fetched_count", "Counter of getRepo fetch attempts."),
            &["remote", "success"],
        )
        .expect("static metric options are valid");
        let repos_indexed_count = CounterVec::new(
            Opts::new("indexer_repos_indexed_count", "Counter of completed repo indexing passes."),
            &["success"],
        )
        .expect("static metric options are valid");
        let records_fetched_count = prometheus::Counter::new(
            "indexer_records_fetched_count",
            "Counter of records extracted from fetched CARs.",
        )
        .expect("static metric options are valid");
        let records_inserted_count = prometheus::Counter::new(
            "indexer_records_inserted_count",
            "Counter of records actually written (monotonic upsert applied).",
        )
        .expect("static metric options are valid");
        let workers_count = Gauge::new("indexer_workers_count", "Current worker pool size.")
            .expect("static metric options are valid");
        let repo_fetched_size_bytes = Histogram::with_opts(HistogramOpts::new(
            "indexer_repo_fetched_size_bytes",
            "Distribution of getRepo response body sizes, in bytes.",
        ))
        .expect("static metric options are valid");

        registry.register(Box::new(repos_queued_count.clone())).expect("metric registration is unique");
        registry.register(Box::new(queue_length.clone())).expect("metric registration is unique");
        registry.register(Box::new(repos_fetched_count.clone())).expect("metric registration is unique");
        registry.register(Box::new(repos_indexed_count.clone())).expect("metric registration is unique");
        registry.register(Box::new(records_fetched_count.clone())).expect("metric registration is unique");
        registry.register(Box::new(records_inserted_count.clone())).expect("metric registration is unique");
        registry.register(Box::new(workers_count.clone())).expect("metric registration is unique");
        registry.register(Box::new(repo_fetched_size_bytes.clone())).expect("metric registration is unique");

        Self {
            repos_queued_count,
            queue_length,
            repos_fetched_count,
            repos_indexed_count,
            records_fetched_count,
            records_inserted_count,
            workers_count,
            repo_fetched_size_bytes,
            registry,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the current metric families in Prometheus text exposition format.
pub fn encode(registry: &Registry) -> String {
    use prometheus::Encoder;
    let encoder = prometheus::TextEncoder::new();
    let families = registry.gather();
    let mut buf = Vec::new();
    encoder
        .encode(&families, &mut buf)
        .expect("encoding gathered metrics cannot fail");
    String::from_utf8(buf).expect("prometheus text encoding is always valid utf8")
}
