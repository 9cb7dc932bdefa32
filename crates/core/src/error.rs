use matsya_types::{AmountError, TextError};

/// Errors produced by core domain operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("unknown {entity} id: {id}")]
    UnknownReference { entity: &'static str, id: String },
    #[error("invalid text: {0}")]
    Text(#[from] TextError),
    #[error("invalid amount: {0}")]
    Amount(#[from] AmountError),
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to write record file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read record file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to serialize record: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize record: {0}")]
    Deserialization(serde_json::Error),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
