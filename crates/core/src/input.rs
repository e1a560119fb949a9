//! JSON interchange format for resolved projects.
//!
//! The upstream resolver writes the tree as nested objects; the project
//! itself is the root and always carries id 0.

use crate::config::RenderOptions;
use crate::error::Result;
use crate::tree::SymbolTree;
use docscope_api::{Comment, ReflectionKind, Symbol, SymbolFlags, SymbolId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
pub struct ProjectInput {
    pub name: String,
    #[serde(default)]
    pub comment: Option<Comment>,
    /// Defaults used when the caller does not override them.
    #[serde(default)]
    pub options: Option<RenderOptions>,
    #[serde(default)]
    pub children: Vec<SymbolInput>,
}

#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
pub struct SymbolInput {
    pub id: SymbolId,
    pub kind: ReflectionKind,
    pub name: String,
    /// Declared name when it differs from `name`.
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default)]
    pub flags: SymbolFlags,
    #[serde(default)]
    pub overwrites: Option<String>,
    #[serde(default)]
    pub inherited_from: Option<String>,
    /// Only absolute urls (`https://...`) survive partitioning.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub children: Vec<SymbolInput>,
}

impl SymbolInput {
    fn into_symbol(self) -> (Symbol, Vec<SymbolInput>) {
        let mut symbol = Symbol::new(self.id, self.kind, self.name);
        if let Some(original) = self.original_name {
            symbol.original_name = original;
        }
        symbol.comment = self.comment;
        symbol.flags = self.flags;
        symbol.overwrites = self.overwrites;
        symbol.inherited_from = self.inherited_from;
        if let Some(url) = self.url {
            symbol.output.url = url;
        }
        (symbol, self.children)
    }
}

impl ProjectInput {
    /// Build the arena. Fails on duplicate ids, including a child using id 0.
    pub fn into_tree(self) -> Result<SymbolTree> {
        let mut root = Symbol::new(SymbolId(0), ReflectionKind::Global, self.name);
        root.comment = self.comment;
        let mut tree = SymbolTree::new(root);

        let mut pending: Vec<(SymbolId, SymbolInput)> = self
            .children
            .into_iter()
            .map(|child| (tree.root(), child))
            .collect();
        pending.reverse();

        // Depth-first, so children keep their declared order.
        while let Some((parent, input)) = pending.pop() {
            let (symbol, children) = input.into_symbol();
            let id = tree.insert(parent, symbol)?;
            pending.extend(children.into_iter().rev().map(|child| (id, child)));
        }
        Ok(tree)
    }
}

pub fn parse_project(json: &str) -> Result<ProjectInput> {
    Ok(serde_json::from_str(json)?)
}

/// Read a project file and build its tree. Returns the options stored in
/// the file alongside it.
pub fn load_project(path: &Path) -> Result<(SymbolTree, Option<RenderOptions>)> {
    let content = fs::read_to_string(path)?;
    let project = parse_project(&content)?;
    let options = project.options.clone();
    let tree = project.into_tree()?;
    info!("Loaded {} symbols from {}", tree.len(), path.display());
    Ok((tree, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocscopeError;

    #[test]
    fn nested_children_keep_order() {
        let json = r#"{
            "name": "demo",
            "children": [
                { "id": 1, "kind": "module", "name": "m", "children": [
                    { "id": 2, "kind": "class", "name": "B" },
                    { "id": 3, "kind": "class", "name": "A", "flags": { "is_exported": true } }
                ]},
                { "id": 4, "kind": "function", "name": "f" }
            ]
        }"#;
        let tree = parse_project(json).unwrap().into_tree().unwrap();

        assert_eq!(tree.len(), 5);
        let roots: Vec<_> = tree.children(tree.root()).collect();
        assert_eq!(roots, vec![SymbolId(1), SymbolId(4)]);
        let module: Vec<_> = tree.children(SymbolId(1)).collect();
        assert_eq!(module, vec![SymbolId(2), SymbolId(3)]);
        assert!(tree[SymbolId(3)].flags.is_exported);
        assert_eq!(tree[SymbolId(3)].original_name, "A");
    }

    #[test]
    fn comments_and_urls_are_carried() {
        let json = r#"{
            "name": "demo",
            "children": [{
                "id": 1, "kind": "class", "name": "Foo",
                "url": "https://example.com/foo",
                "comment": { "short_text": "Foo.", "text": "", "tags": [
                    { "tag": "param", "param": "bar.x", "text": "the x" }
                ]}
            }]
        }"#;
        let tree = parse_project(json).unwrap().into_tree().unwrap();
        let foo = &tree[SymbolId(1)];
        assert_eq!(foo.url(), "https://example.com/foo");
        let comment = foo.comment.as_ref().unwrap();
        assert_eq!(comment.tags[0].param_name, "bar.x");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{ "name": "demo", "children": [
            { "id": 0, "kind": "module", "name": "m" }
        ]}"#;
        let result = parse_project(json).unwrap().into_tree();
        assert!(matches!(result, Err(DocscopeError::InvalidTree(_))));
    }

    #[test]
    fn unknown_kind_is_a_json_error() {
        let json = r#"{ "name": "demo", "children": [
            { "id": 1, "kind": "widget", "name": "w" }
        ]}"#;
        assert!(matches!(parse_project(json), Err(DocscopeError::Json(_))));
    }
}
