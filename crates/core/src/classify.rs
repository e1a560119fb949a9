//! Presentation tokens for symbols and groups.
//!
//! Token order is fixed by the order of the checks below and never depends
//! on map iteration, so the strings are stable across runs.

use crate::naming::to_style_class;
use crate::tree::SymbolTree;
use docscope_api::{ReflectionKind, SymbolGroup, SymbolId};

/// Space separated tokens describing `id`.
pub fn symbol_classes(tree: &SymbolTree, id: SymbolId) -> String {
    let symbol = &tree[id];
    let mut classes = vec![to_style_class(&format!("tsd-kind-{}", kind_token(tree, id)))];

    if let Some(parent) = symbol.parent.map(|p| &tree[p]) {
        if parent.kind.is_declaration() {
            classes.push(to_style_class(&format!("tsd-parent-kind-{}", parent.kind.name())));
        }
    }

    if has_type_parameters(tree, id) {
        classes.push("tsd-has-type-parameter".to_string());
    }
    if symbol.overwrites.is_some() {
        classes.push("tsd-is-overwrite".to_string());
    }
    if symbol.inherited_from.is_some() {
        classes.push("tsd-is-inherited".to_string());
    }

    let flags = &symbol.flags;
    if flags.is_private {
        classes.push("tsd-is-private".to_string());
    }
    if flags.is_protected {
        classes.push("tsd-is-protected".to_string());
    }
    if flags.is_static {
        classes.push("tsd-is-static".to_string());
    }
    if flags.is_external {
        classes.push("tsd-is-external".to_string());
    }
    if !flags.is_exported {
        classes.push("tsd-is-not-exported".to_string());
    }

    classes.join(" ")
}

/// Accessors are named after the halves they actually have.
fn kind_token(tree: &SymbolTree, id: SymbolId) -> &'static str {
    let kind = tree[id].kind;
    if kind != ReflectionKind::Accessor {
        return kind.name();
    }
    let has = |wanted: ReflectionKind| tree.children(id).any(|c| tree[c].kind == wanted);
    match (
        has(ReflectionKind::GetSignature),
        has(ReflectionKind::SetSignature),
    ) {
        (true, false) => ReflectionKind::GetSignature.name(),
        (false, true) => ReflectionKind::SetSignature.name(),
        _ => ReflectionKind::Accessor.name(),
    }
}

/// Whether `id` or one of its signatures declares type parameters.
pub fn has_type_parameters(tree: &SymbolTree, id: SymbolId) -> bool {
    let declares = |owner: SymbolId| {
        tree.children(owner)
            .any(|c| tree[c].kind == ReflectionKind::TypeParameter)
    };
    declares(id)
        || tree
            .children(id)
            .filter(|c| tree[*c].kind.is_signature())
            .any(declares)
}

/// Space separated tokens for a group, from flags shared by all members.
pub fn group_classes(group: &SymbolGroup) -> String {
    let mut classes = Vec::new();
    if group.all_children_are_inherited {
        classes.push("tsd-is-inherited");
    }
    if group.all_children_are_private {
        classes.push("tsd-is-private");
    }
    if group.all_children_are_protected_or_private {
        classes.push("tsd-is-private-protected");
    }
    if group.all_children_are_external {
        classes.push("tsd-is-external");
    }
    if !group.some_children_are_exported {
        classes.push("tsd-is-not-exported");
    }
    classes.join(" ")
}

/// Store tokens on every symbol and group of the tree.
pub fn classify(tree: &mut SymbolTree) {
    for id in tree.descendants(tree.root()) {
        let classes = symbol_classes(tree, id);
        if let Some(symbol) = tree.get_mut(id) {
            symbol.output.css_classes = classes;
            for group in &mut symbol.groups {
                group.css_classes = group_classes(group);
            }
        }
    }
}
