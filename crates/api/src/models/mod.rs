pub mod comment;
pub mod document;
pub mod group;
pub mod kind;
pub mod navigation;
pub mod symbol;

pub use comment::*;
pub use document::*;
pub use group::*;
pub use kind::*;
pub use navigation::*;
pub use symbol::*;
