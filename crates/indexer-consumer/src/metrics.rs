//! Prometheus metrics for the firehose consumers and relay discovery
//! consumer, grounded on `cmd/consumer/metrics.go`.

use prometheus::{CounterVec, GaugeVec, Registry};

pub struct Metrics {
    pub commit_received_timestamp: GaugeVec,
    pub commits_received: CounterVec,
    pub repos_discovered: CounterVec,
    pub connection_failures: CounterVec,
    pub connection_up: GaugeVec,
    registry: Registry,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let commit_received_timestamp = GaugeVec::new(
            prometheus::Opts::new(
                "repo_commit_received_timestamp",
                "Unix timestamp of the most recently processed firehose frame.",
            ),
            &["remote"],
        )
        .expect("static metric options are valid");
        let commits_received = CounterVec::new(
            prometheus::Opts::new(
                "repo_commits_received_counter",
                "Counter of firehose frames received, by event type.",
            ),
            &["remote", "type"],
        )
        .expect("static metric options are valid");
        let repos_discovered = CounterVec::new(
            prometheus::Opts::new(
                "repo_discovered_counter",
                "Counter of previously-unknown PDSes discovered via relay events.",
            ),
            &["remote"],
        )
        .expect("static metric options are valid");
        let connection_failures = CounterVec::new(
            prometheus::Opts::new(
                "consumer_connection_failures",
                "Counter of firehose websocket connection failures.",
            ),
            &["remote"],
        )
        .expect("static metric options are valid");
        let connection_up = GaugeVec::new(
            prometheus::Opts::new(
                "consumer_connection_up",
                "1 if the consumer currently has a live websocket connection, else 0.",
            ),
            &["remote"],
        )
        .expect("static metric options are valid");

        registry.register(Box::new(commit_received_timestamp.clone())).expect("metric registration is unique");
        registry.register(Box::new(commits_received.clone())).expect("metric registration is unique");
        registry.register(Box::new(repos_discovered.clone())).expect("metric registration is unique");
        registry.register(Box::new(connection_failures.clone())).expect("metric registration is unique");
        registry.register(Box::new(connection_up.clone())).expect("metric registration is unique");

        Self {
            commit_received_timestamp,
            commits_received,
            repos_discovered,
            connection_failures,
            connection_up,
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
