//! Sorts the declared children of every container into kind groups.

use crate::tree::SymbolTree;
use docscope_api::{ReflectionKind, SymbolGroup, SymbolId};
use std::collections::BTreeMap;

/// Order in which groups are listed on a page.
const GROUP_ORDER: [ReflectionKind; 24] = [
    ReflectionKind::Global,
    ReflectionKind::ExternalModule,
    ReflectionKind::Module,
    ReflectionKind::Enum,
    ReflectionKind::EnumMember,
    ReflectionKind::Class,
    ReflectionKind::Interface,
    ReflectionKind::TypeAlias,
    ReflectionKind::Constructor,
    ReflectionKind::Event,
    ReflectionKind::Property,
    ReflectionKind::Variable,
    ReflectionKind::Function,
    ReflectionKind::Accessor,
    ReflectionKind::Method,
    ReflectionKind::ObjectLiteral,
    ReflectionKind::Parameter,
    ReflectionKind::TypeParameter,
    ReflectionKind::TypeLiteral,
    ReflectionKind::CallSignature,
    ReflectionKind::ConstructorSignature,
    ReflectionKind::IndexSignature,
    ReflectionKind::GetSignature,
    ReflectionKind::SetSignature,
];

fn weight(kind: ReflectionKind) -> usize {
    GROUP_ORDER
        .iter()
        .position(|k| *k == kind)
        .unwrap_or(GROUP_ORDER.len())
}

/// Rebuild the groups of every container symbol in the tree.
///
/// Needs the partition to have run: groups record whether all their
/// members got pages of their own.
pub fn assign_groups(tree: &mut SymbolTree) {
    for id in tree.descendants(tree.root()) {
        let groups = if tree[id].kind.is_container() {
            build_groups(tree, id)
        } else {
            Vec::new()
        };
        if let Some(symbol) = tree.get_mut(id) {
            symbol.groups = groups;
        }
    }
}

/// Groups of the declared children of `id`, ordered by kind weight.
pub fn build_groups(tree: &SymbolTree, id: SymbolId) -> Vec<SymbolGroup> {
    let mut by_weight: BTreeMap<usize, SymbolGroup> = BTreeMap::new();
    for child in tree.children(id) {
        let kind = tree[child].kind;
        if !kind.is_declaration() {
            continue;
        }
        by_weight
            .entry(weight(kind))
            .or_insert_with(|| SymbolGroup::new(kind))
            .children
            .push(child);
    }

    by_weight
        .into_values()
        .map(|mut group| {
            group.children.sort_by_cached_key(|c| (tree[*c].name.to_lowercase(), *c));
            summarize(tree, &mut group);
            group
        })
        .collect()
}

fn summarize(tree: &SymbolTree, group: &mut SymbolGroup) {
    let members = || group.children.iter().map(|c| &tree[*c]);
    let all_own_document = members().all(|s| s.has_own_document());
    let all_inherited = members().all(|s| s.inherited_from.is_some());
    let all_private = members().all(|s| s.flags.is_private);
    let all_protected_or_private = members().all(|s| s.flags.is_private || s.flags.is_protected);
    let all_external = members().all(|s| s.flags.is_external);
    let some_exported = members().any(|s| s.flags.is_exported);

    group.all_children_have_own_document = all_own_document;
    group.all_children_are_inherited = all_inherited;
    group.all_children_are_private = all_private;
    group.all_children_are_protected_or_private = all_protected_or_private;
    group.all_children_are_external = all_external;
    group.some_children_are_exported = some_exported;
}
