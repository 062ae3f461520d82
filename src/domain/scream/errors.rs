use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Scream already liked")]
    AlreadyLiked,
    #[error("Scream not liked")]
    NotLiked,
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}
