#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A symbol id that is not part of the tree.
    #[error("Symbol not found: {0}")]
    NotFound(String),
    #[error("Unknown reflection kind: {0}")]
    UnknownKind(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
