use super::symbol::SymbolId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Template used for the overview page emitted next to `globals.html`.
pub const INDEX_TEMPLATE: &str = "index";
/// Template used for every symbol page.
pub const REFLECTION_TEMPLATE: &str = "reflection";

/// One output page handed to the renderer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct DocumentRecord {
    pub url: String,
    pub symbol: SymbolId,
    pub template: String,
}

impl DocumentRecord {
    pub fn new(url: impl Into<String>, symbol: SymbolId, template: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            symbol,
            template: template.into(),
        }
    }
}

