use docscope_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid symbol tree: {0}")]
    InvalidTree(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, DocscopeError>;
