//! Prometheus metrics for the mirror loop, grounded on
//! `cmd/record-indexer/metrics.go`'s registration pattern.

use prometheus::{Counter, Gauge, Registry};

pub struct Metrics {
    pub entries_mirrored_count: Counter,
    pub poll_errors_count: Counter,
    pub last_success_timestamp: Gauge,
    registry: Registry,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let entries_mirrored_count = Counter::new(
            "plc_mirror_entries_mirrored_count",
            "Counter of PLC log entries written by the mirror loop.",
        )
        .expect("static metric options are valid");
        let poll_errors_count = Counter::new(
            "plc_mirror_poll_errors_count",
            "Counter of failed export poll passes.",
        )
        .expect("static metric options are valid");
        let last_success_timestamp = Gauge::new(
            "plc_mirror_last_success_timestamp",
            "Unix timestamp of the last poll pass that completed without error.",
        )
        .expect("static metric options are valid");

        registry.register(Box::new(entries_mirrored_count.clone())).expect("metric registration is unique");
        registry.register(Box::new(poll_errors_count.clone())).expect("metric registration is unique");
        registry.register(Box::new(last_success_timestamp.clone())).expect("metric registration is unique");

        Self {
            entries_mirrored_count,
            poll_errors_count,
            last_success_timestamp,
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
