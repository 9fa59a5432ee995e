use thiserror::Error;

#[derive(Debug, Error)]
pub enum MirrorError {
    #[error(transparent)]
    Store(#[from] indexer_store::StoreError),

    #[error("http request to PLC directory failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("bad PLC export entry: {message}")]
    BadEntry { message: String },
}

pub type Result<T> = std::result::Result<T, MirrorError>;
