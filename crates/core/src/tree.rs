//! Arena holding the resolved symbol tree.
//!
//! The arena owns every symbol; a parent lists its children by id (insertion
//! order) and a child points back at its parent by id. Symbols can only be
//! attached under an already present parent and identifiers are unique, so
//! the ownership structure is always a tree no matter how symbols refer to
//! each other otherwise.

use crate::error::{DocscopeError, Result};
use docscope_api::{ApiError, ReflectionKind, Symbol, SymbolId};
use indexmap::IndexMap;
use std::ops::Index;

#[derive(Debug, Clone)]
pub struct SymbolTree {
    symbols: IndexMap<SymbolId, Symbol>,
    root: SymbolId,
}

impl SymbolTree {
    /// Create a tree from its root symbol.
    pub fn new(mut root: Symbol) -> Self {
        root.parent = None;
        root.children.clear();
        let id = root.id;
        let mut symbols = IndexMap::new();
        symbols.insert(id, root);
        Self { symbols, root: id }
    }

    /// Create a tree whose root is a project named `name` with id 0.
    pub fn project(name: impl Into<String>) -> Self {
        Self::new(Symbol::new(SymbolId(0), ReflectionKind::Global, name))
    }

    /// Attach `symbol` as the last child of `parent`.
    pub fn insert(&mut self, parent: SymbolId, mut symbol: Symbol) -> Result<SymbolId> {
        let id = symbol.id;
        if self.symbols.contains_key(&id) {
            return Err(DocscopeError::InvalidTree(format!(
                "duplicate symbol id {} ({})",
                id, symbol.name
            )));
        }
        let Some(owner) = self.symbols.get_mut(&parent) else {
            return Err(ApiError::NotFound(format!("parent symbol {} of {}", parent, symbol.name)).into());
        };
        owner.children.insert(id);

        symbol.parent = Some(parent);
        symbol.children.clear();
        self.symbols.insert(id, symbol);
        Ok(id)
    }

    pub fn root(&self) -> SymbolId {
        self.root
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(&id)
    }

    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.symbols.get_mut(&id)
    }

    pub fn contains(&self, id: SymbolId) -> bool {
        self.symbols.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All symbols in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Symbol> {
        self.symbols.values_mut()
    }

    pub fn parent(&self, id: SymbolId) -> Option<SymbolId> {
        self.get(id).and_then(|s| s.parent)
    }

    /// Children of `id` in insertion order.
    pub fn children(&self, id: SymbolId) -> impl Iterator<Item = SymbolId> + '_ {
        self.get(id)
            .into_iter()
            .flat_map(|s| s.children.iter().copied())
    }

    pub fn children_of_kind(
        &self,
        id: SymbolId,
        pred: impl Fn(ReflectionKind) -> bool,
    ) -> Vec<SymbolId> {
        self.children(id).filter(|c| pred(self[*c].kind)).collect()
    }

    /// Ancestors of `id`, nearest first, ending with the root.
    pub fn ancestors(&self, id: SymbolId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    pub fn is_ancestor_of(&self, ancestor: SymbolId, id: SymbolId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// `id` followed by all of its descendants, depth-first pre-order.
    pub fn descendants(&self, id: SymbolId) -> Vec<SymbolId> {
        let mut out = Vec::new();
        if !self.contains(id) {
            return out;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            let children: Vec<SymbolId> = self.children(current).collect();
            stack.extend(children.into_iter().rev());
        }
        out
    }

    /// Names from the first level below the root down to `id`, joined by `.`.
    pub fn full_name(&self, id: SymbolId) -> String {
        let Some(symbol) = self.get(id) else {
            return String::new();
        };
        if id == self.root {
            return symbol.name.clone();
        }
        let mut names: Vec<&str> = std::iter::once(id)
            .chain(self.ancestors(id))
            .filter(|a| *a != self.root)
            .map(|a| self[a].name.as_str())
            .collect();
        names.reverse();
        names.join(".")
    }

    /// Direct child of `parent` called `name`. Quotes around module names
    /// (`"src/util"`) are optional.
    pub fn child_by_name(&self, parent: SymbolId, name: &str) -> Option<SymbolId> {
        self.children(parent).find(|c| {
            let child = &self[*c];
            child.name == name || child.name.trim_matches('"') == name
        })
    }

    /// Resolve a dotted path such as `a.b.Foo` starting below the root.
    pub fn resolve_path(&self, path: &str) -> Option<SymbolId> {
        if let Some(id) = self.child_by_name(self.root, path) {
            return Some(id);
        }
        path.split('.')
            .try_fold(self.root, |current, segment| self.child_by_name(current, segment))
            .filter(|id| *id != self.root)
    }
}

impl Index<SymbolId> for SymbolTree {
    type Output = Symbol;

    fn index(&self, id: SymbolId) -> &Symbol {
        &self.symbols[&id]
    }
}

pub struct Ancestors<'a> {
    tree: &'a SymbolTree,
    next: Option<SymbolId>,
}

impl Iterator for Ancestors<'_> {
    type Item = SymbolId;

    fn next(&mut self) -> Option<SymbolId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
