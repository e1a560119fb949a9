use super::comment::Comment;
use super::group::SymbolGroup;
use super::kind::ReflectionKind;
use indexmap::IndexSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier assigned by the upstream tree builder.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
#[serde(transparent)]
pub struct SymbolId(pub u32);

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct SymbolFlags {
    pub is_private: bool,
    pub is_protected: bool,
    pub is_public: bool,
    pub is_static: bool,
    pub is_external: bool,
    pub is_exported: bool,
    pub is_optional: bool,
    pub is_rest: bool,
}

/// Where a symbol ends up in the generated output.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct OutputLocation {
    /// Page url, or page url + `#` + anchor.
    pub url: String,
    /// Empty when the symbol owns its document.
    pub anchor: String,
    pub has_own_document: bool,
    /// Space separated presentation tokens.
    pub css_classes: String,
}

/// A node of the documentable symbol tree.
///
/// Children are owned through the tree arena and listed here in insertion
/// order; `parent` is a plain back-reference.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Symbol {
    pub id: SymbolId,
    pub kind: ReflectionKind,
    /// Display name.
    pub name: String,
    /// Name as declared in source, before any renaming.
    pub original_name: String,
    pub comment: Option<Comment>,
    pub flags: SymbolFlags,
    /// Display name of the member this symbol overwrites.
    pub overwrites: Option<String>,
    /// Display name of the member this symbol is inherited from.
    pub inherited_from: Option<String>,
    pub parent: Option<SymbolId>,
    pub children: IndexSet<SymbolId>,
    pub groups: Vec<SymbolGroup>,
    pub output: OutputLocation,
}

impl Symbol {
    pub fn new(id: SymbolId, kind: ReflectionKind, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            kind,
            original_name: name.clone(),
            name,
            comment: None,
            flags: SymbolFlags::default(),
            overwrites: None,
            inherited_from: None,
            parent: None,
            children: IndexSet::new(),
            groups: Vec::new(),
            output: OutputLocation::default(),
        }
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn with_flags(mut self, flags: SymbolFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_original_name(mut self, original_name: impl Into<String>) -> Self {
        self.original_name = original_name.into();
        self
    }

    pub fn with_overwrites(mut self, target: impl Into<String>) -> Self {
        self.overwrites = Some(target.into());
        self
    }

    pub fn with_inherited_from(mut self, source: impl Into<String>) -> Self {
        self.inherited_from = Some(source.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.output.url = url.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.output.url
    }

    pub fn anchor(&self) -> &str {
        &self.output.anchor
    }

    pub fn has_own_document(&self) -> bool {
        self.output.has_own_document
    }

    pub fn css_classes(&self) -> &str {
        &self.output.css_classes
    }
}
