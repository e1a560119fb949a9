//! Documentation output phase: turns a resolved symbol tree into pages,
//! anchors, navigation and presentation tokens for a renderer.

pub mod error;
pub mod logging;

pub mod classify;
pub mod comments;
pub mod config;
pub mod groups;
pub mod input;
pub mod mapping;
pub mod naming;
pub mod navigation;
pub mod partition;
pub mod phase;
pub mod tree;

pub use error::{DocscopeError, Result};
pub use phase::{DocumentationPhase, PlanOutput, RenderPlan};
pub use tree::SymbolTree;
