//! Prometheus counters for the lister, grounded on `cmd/lister/metrics.go`.

use prometheus::{CounterVec, Opts, Registry};

pub struct Metrics {
    pub repos_discovered: CounterVec,
    pub repos_listed: CounterVec,
    registry: Registry,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let repos_discovered = CounterVec::new(
            Opts::new("repo_discovered_counter", "Counter of newly discovered repos"),
            &["remote"],
        )
        .expect("static metric options are valid");
        let repos_listed = CounterVec::new(
            Opts::new(
                "repo_listed_counter",
                "Counter of repos received by listing PDSs.",
            ),
            &["remote"],
        )
        .expect("static metric options are valid");

        registry
            .register(Box::new(repos_discovered.clone()))
            .expect("metric registration is unique");
        registry
            .register(Box::new(repos_listed.clone()))
            .expect("metric registration is unique");

        Self {
            repos_discovered,
            repos_listed,
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
