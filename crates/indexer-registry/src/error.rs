/// Errors raised while ensuring a PDS or repo row exists.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum RegistryError {
    #[error("host {0:?} is not in the PDS whitelist")]
    NotWhitelisted(String),
    #[error(transparent)]
    Store(#[from] indexer_store::StoreError),
    #[error(transparent)]
    Identity(#[from] jacquard_identity::resolver::IdentityError),
    #[error("DID document for {did} has no AtprotoPersonalDataServer service entry")]
    MissingPdsEndpoint { did: String },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
