#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum FirehoseError {
    #[error(transparent)]
    Store(#[from] indexer_store::StoreError),
    #[error(transparent)]
    Registry(#[from] indexer_registry::RegistryError),
    #[error("websocket connect to {host}: {message}")]
    Connect { host: String, message: String },
    #[error("websocket stream: {0}")]
    Stream(String),
    #[error("server closed the stream with an error frame: {error}: {message:?}")]
    ServerError { error: String, message: Option<String> },
    #[error("more than {cap} bad frames quarantined for this host, giving up")]
    BadFrameCapExceeded { cap: i64 },
    #[error("no heartbeat frame received within the idle window")]
    IdleTimeout,
}

pub type Result<T> = std::result::Result<T, FirehoseError>;
