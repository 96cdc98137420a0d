use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Manifest error: {0}")]
    ManifestError(String),

    #[error("Invalid upload task: {0}")]
    InvalidTask(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
