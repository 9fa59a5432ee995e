//! Whitelist-gated PDS and repo registries: the insert-if-absent layer
//! between the lister/firehose consumer and `indexer-store`'s raw tables.

pub mod error;
pub mod pds;
pub mod repo;
pub mod whitelist;

pub use error::{RegistryError, Result};
pub use pds::PdsRegistry;
pub use repo::RepoRegistry;
