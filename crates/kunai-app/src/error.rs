use thiserror::Error;

/// Application-level errors (input and rendering options)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read contact input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid contact JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    RfcError(#[from] kunai_rfc::error::RfcError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
