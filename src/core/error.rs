use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    /// Server rejected the submission with a per-field error map.
    /// Keys use the server's dotted names (e.g. `location.detail`).
    #[error("Submission rejected by server")]
    RemoteValidation(HashMap<String, String>),

    /// Server rejected the submission without field-level detail.
    #[error("Submission failed: {0}")]
    Remote(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
