use super::kind::ReflectionKind;
use super::symbol::SymbolId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Children of a container that share a kind, e.g. all "Classes" of a module.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct SymbolGroup {
    pub title: String,
    pub kind: ReflectionKind,
    pub children: Vec<SymbolId>,
    pub all_children_have_own_document: bool,
    pub all_children_are_inherited: bool,
    pub all_children_are_private: bool,
    pub all_children_are_protected_or_private: bool,
    pub all_children_are_external: bool,
    pub some_children_are_exported: bool,
    pub css_classes: String,
}

impl SymbolGroup {
    pub fn new(kind: ReflectionKind) -> Self {
        Self {
            title: kind.plural(),
            kind,
            children: Vec::new(),
            all_children_have_own_document: false,
            all_children_are_inherited: false,
            all_children_are_private: false,
            all_children_are_protected_or_private: false,
            all_children_are_external: false,
            some_children_are_exported: false,
            css_classes: String::new(),
        }
    }
}
