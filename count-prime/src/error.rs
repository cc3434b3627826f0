use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Chunk size must be greater than zero")]
    ZeroChunkSize,

    #[error("Sieve limit {0} is negative")]
    NegativeSieveLimit(i32),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CountError>;
