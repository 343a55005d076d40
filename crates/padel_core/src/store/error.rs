use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("Session not found: {id}")]
    NotFound { id: Uuid },
}

impl StoreError {
    /// Whether retrying the operation could succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            StoreError::Io(_) => true,
            StoreError::Serialization(_) => false,
            StoreError::Deserialization(_) => false,
            StoreError::NotFound { .. } => false,
        }
    }
}
