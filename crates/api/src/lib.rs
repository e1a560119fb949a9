//! Data model shared by the docscope pipeline and its consumers: the symbol
//! tree nodes, their comments, and the output records handed to a renderer.

pub mod error;
pub mod models;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use models::*;
