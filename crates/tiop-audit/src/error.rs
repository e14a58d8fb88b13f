use thiserror::Error;

use tiop_core::error::ValidationError;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(String),
}
