//! Firehose ingestion: one `subscribeRepos` consumer per known PDS, a relay
//! discovery consumer, and a supervisor keeping the consumer set in sync
//! with the whitelisted, enabled PDS set, grounded on `cmd/consumer`'s
//! per-host goroutine supervisor.

pub mod consumer;
pub mod error;
pub mod metrics;
pub mod relay;
pub mod supervisor;

mod events;

pub use consumer::Consumer;
pub use error::{FirehoseError, Result};
pub use relay::RelayConsumer;
pub use supervisor::Supervisor;

use jacquard_common::types::did::Did;

/// Cache invalidation hook exposed by resolver wrappers that cache DID
/// documents. The firehose consumer flushes a DID's entry whenever an
/// `#identity` event reports it, so a later `#commit` re-resolves instead of
/// trusting a possibly-stale PDS endpoint.
pub trait ResolverCache {
    fn flush_cache_for(&self, did: &Did<'_>);
}

impl<R> ResolverCache for jacquard_identity::cache::CachingResolver<R> {
    fn flush_cache_for(&self, did: &Did<'_>) {
        jacquard_identity::cache::CachingResolver::flush_cache_for(self, did)
    }
}

impl<R: ResolverCache> ResolverCache for std::sync::Arc<R> {
    fn flush_cache_for(&self, did: &Did<'_>) {
        self.as_ref().flush_cache_for(did)
    }
}

/// Number of bad frames quarantined for a PDS before the consumer gives up
/// and surfaces a fatal error instead of continuing to swallow failures.
pub const BAD_FRAME_CAP: i64 = 500;

/// Maximum time with no frame received (including the server's own
/// keepalive traffic) before the consumer treats the connection as dead and
/// reconnects. The subscribeRepos protocol has no application-level ping the
/// consumer can send; this idle watchdog is the consumer's half of "a
/// heartbeat every minute".
pub const IDLE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

/// Delay before reconnecting after a recoverable transport error.
pub const RECONNECT_DELAY: std::time::Duration = std::time::Duration::from_secs(1);

/// Minimum cursor advance that forces a persisted cursor write regardless of
/// elapsed time, so a crash never loses more than this many events of
/// progress.
pub const CURSOR_PERSIST_DELTA: i64 = 100;

/// Maximum time a persisted cursor is allowed to lag the in-memory value,
/// even if it hasn't advanced by `CURSOR_PERSIST_DELTA` yet.
pub const CURSOR_PERSIST_INTERVAL: std::time::Duration = std::time::Duration::from_secs(5);
