#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum IndexerError {
    #[error(transparent)]
    Store(#[from] indexer_store::StoreError),
    #[error(transparent)]
    Registry(#[from] indexer_registry::RegistryError),
    #[error(transparent)]
    Identity(#[from] jacquard_identity::resolver::IdentityError),
    #[error("CAR extraction failed for {did}: {message}")]
    Extract { did: String, message: String },
    #[error("fetching repo for {did} from {host}: {message}")]
    Fetch { did: String, host: String, message: String },
    #[error("repo {did} was throttled twice in a row, giving up for this pass")]
    ThrottledTwice { did: String },
    #[error("PDS {host} has no row in the store")]
    UnknownPds { host: String },
}

pub type Result<T> = std::result::Result<T, IndexerError>;
