use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// Session storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Error generating random state tokens
    #[error("Crypto error: {0}")]
    Crypto(String),
}
