//! Dotted names built by walking up the symbol tree.
//!
//! The same walk is used for comment addressing (declared names) and for
//! url/anchor synthesis (aliases): signature nodes and unnamed or internal
//! (`__`-prefixed) nodes are traversed but contribute no segment.

use crate::tree::SymbolTree;
use docscope_api::{Symbol, SymbolId};
use std::collections::{HashMap, HashSet};

/// Whether `symbol` adds a segment to a dotted path built through it.
pub fn contributes_segment(symbol: &Symbol) -> bool {
    !symbol.kind.is_signature()
        && !symbol.original_name.is_empty()
        && !symbol.original_name.starts_with("__")
}

/// File-system friendly form of a symbol name: every character other than
/// an ASCII letter, digit or `_` becomes `_`, then lowercased.
pub fn alias_base(symbol: &Symbol) -> String {
    let alias: String = symbol
        .name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if alias.is_empty() {
        format!("reflection-{}", symbol.id)
    } else {
        alias
    }
}

/// Unique url segment of every symbol among its siblings.
///
/// Siblings whose names collapse to the same alias get `-1`, `-2`, ...
/// suffixes in insertion order, so the table is a pure function of the tree.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: HashMap<SymbolId, String>,
}

impl AliasTable {
    pub fn build(tree: &SymbolTree) -> Self {
        let mut aliases = HashMap::with_capacity(tree.len());
        for id in tree.descendants(tree.root()) {
            let mut taken: HashSet<String> = HashSet::new();
            for child in tree.children(id) {
                let base = alias_base(&tree[child]);
                let mut alias = base.clone();
                let mut index = 0;
                while taken.contains(&alias) {
                    index += 1;
                    alias = format!("{}-{}", base, index);
                }
                taken.insert(alias.clone());
                aliases.insert(child, alias);
            }
        }
        Self { aliases }
    }

    pub fn get(&self, id: SymbolId) -> Option<&str> {
        self.aliases.get(&id).map(String::as_str)
    }

    /// Dotted alias path contributed by `id` and its ancestors, without the
    /// project root. Symbols that contribute no segment add nothing.
    pub fn prefix(&self, tree: &SymbolTree, id: SymbolId) -> String {
        let mut segments: Vec<String> = std::iter::once(id)
            .chain(tree.ancestors(id))
            .filter(|a| *a != tree.root() && contributes_segment(&tree[*a]))
            .map(|a| self.segment(tree, a))
            .collect();
        segments.reverse();
        segments.join(".")
    }

    /// Alias of `id`, falling back to its base form for the root.
    pub fn segment(&self, tree: &SymbolTree, id: SymbolId) -> String {
        self.get(id)
            .map(str::to_string)
            .unwrap_or_else(|| alias_base(&tree[id]))
    }
}

/// `base.segment`, or just `segment` when there is no base.
pub fn join_path(base: &str, segment: &str) -> String {
    if base.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", base, segment)
    }
}

/// `CallSignature` -> `call-signature`.
pub fn to_style_class(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_alphanumeric() || p == '_') {
            out.push('-');
        }
        out.push(c.to_ascii_lowercase());
        prev = Some(c);
    }
    out
}
