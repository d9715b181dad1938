use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`ProductStore`](super::ProductStore) operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product validation error: {0}")]
    Validation(String),
    #[error("Product code already exists: {0}")]
    DuplicateCode(String),
    #[error("Product not found: {0}")]
    NotFound(u64),
    #[error("Product storage error at {}: {}", .path.display(), .message)]
    Storage { path: PathBuf, message: String },
}

impl ProductError {
    pub(crate) fn storage(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        Self::Storage {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
