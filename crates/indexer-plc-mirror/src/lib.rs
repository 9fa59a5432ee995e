//! Mirrors a PLC directory's `/export` operation log into local storage and
//! re-serves synthesized DID documents from the mirror, grounded on
//! `indexer-lister`'s poll-loop shape and `indexer-record-indexer`'s axum
//! wiring.

pub mod error;
pub mod metrics;
pub mod mirror;
pub mod serve;

pub use error::{MirrorError, Result};
pub use mirror::Mirror;
