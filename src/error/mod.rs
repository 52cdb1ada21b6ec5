use thiserror::Error;

#[derive(Error, Debug)]
pub enum OgpError {
    #[error("Invalid metadata record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type OgpResult<T> = Result<T, OgpError>;
