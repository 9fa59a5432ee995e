//! Backfill via `com.atproto.sync.getRepo`: a scheduler that keeps an
//! in-memory queue of repos due for (re-)fetch fed from the store layer's
//! watermark predicate, and a dynamically resizable worker pool that drains
//! it, grounded on `cmd/record-indexer`'s scheduler/workerpool split.

pub mod admin;
pub mod error;
pub mod metrics;
pub mod ratelimits;
pub mod scheduler;
pub mod workerpool;

pub use error::{IndexerError, Result};
pub use scheduler::Scheduler;
pub use workerpool::WorkerPool;
