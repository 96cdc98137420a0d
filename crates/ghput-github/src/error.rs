use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("GitHub API rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
