//! Builds the browsable site hierarchy from module-like symbols.
//!
//! Small projects get one flat list of every in-scope module, split into
//! "Internals" and "Externals" when both are present. Once the number of
//! in-scope modules reaches [`MODULE_THRESHOLD`] the list is nested instead:
//! the entry point's modules at the top, their sub-modules below them.
//! Runs after partitioning; every entry reuses the url its symbol received.

use crate::config::{INDEX_URL, MODULE_THRESHOLD};
use crate::tree::SymbolTree;
use docscope_api::{NavId, NavigationNode, NavigationTree, ReflectionKind, SymbolId};
use std::cmp::Ordering;
use tracing::info;

pub const INTERNALS_LABEL: &str = "Internals";
pub const EXTERNALS_LABEL: &str = "Externals";
pub const DIVIDER_CLASS: &str = "tsd-is-external";

/// Build the navigation tree for a partitioned symbol tree.
pub fn build_navigation(tree: &SymbolTree, entry: SymbolId, threshold: usize) -> NavigationTree {
    let mut nav = NavigationTree::new(NavigationNode::link("Index", INDEX_URL));
    let root = nav.root();

    if entry == tree.root() {
        let mut globals = NavigationNode::link("Globals", tree[entry].url());
        globals.symbol = Some(entry);
        globals.is_globals = true;
        nav.add_child(root, globals);
    }

    let modules = modules_in_scope(tree, entry);
    if modules.len() < threshold {
        build_groups(tree, &mut nav, root, modules);
    } else {
        let mut top = tree.children_of_kind(entry, ReflectionKind::is_module);
        sort_external_last(tree, &mut top);
        build_nested(tree, &mut nav, root, top);
    }

    info!("Navigation built with {} nodes", nav.len());
    nav
}

/// [`build_navigation`] with the fixed module threshold.
pub fn navigation(tree: &SymbolTree, entry: SymbolId) -> NavigationTree {
    build_navigation(tree, entry, MODULE_THRESHOLD)
}

/// Module-like symbols reachable from `entry` without entering an external
/// module on the way, in tree order. The entry point counts when it is a module.
pub fn modules_in_scope(tree: &SymbolTree, entry: SymbolId) -> Vec<SymbolId> {
    tree.descendants(tree.root())
        .into_iter()
        .filter(|id| tree[*id].kind.is_module())
        .filter(|id| *id == entry || reaches_entry(tree, *id, entry))
        .collect()
}

fn reaches_entry(tree: &SymbolTree, id: SymbolId, entry: SymbolId) -> bool {
    for ancestor in tree.ancestors(id) {
        if ancestor == entry {
            return true;
        }
        if tree[ancestor].kind == ReflectionKind::ExternalModule {
            return false;
        }
    }
    false
}

/// External symbols last, then by full dotted name.
pub fn sort_external_last(tree: &SymbolTree, modules: &mut [SymbolId]) {
    modules.sort_by_cached_key(|id| (tree[*id].flags.is_external, tree.full_name(*id), *id));
}

/// Flat list under `parent` with a divider before each category run.
fn build_groups(tree: &SymbolTree, nav: &mut NavigationTree, parent: NavId, mut modules: Vec<SymbolId>) {
    let has_externals = modules.iter().any(|m| tree[*m].flags.is_external);
    let has_internals = modules.iter().any(|m| !tree[*m].flags.is_external);
    let mixed = has_externals && has_internals;
    sort_external_last(tree, &mut modules);

    let mut current: Option<bool> = None;
    for module in modules {
        let external = tree[module].flags.is_external;
        if mixed && current != Some(external) {
            let label = if external { EXTERNALS_LABEL } else { INTERNALS_LABEL };
            nav.add_child(parent, NavigationNode::divider(label, DIVIDER_CLASS));
            current = Some(external);
        }
        add_symbol_node(tree, nav, parent, module);
    }
}

/// Nested entries for `top` and, below each, its module children sorted by
/// full name. Nodes are added in pre-order.
fn build_nested(tree: &SymbolTree, nav: &mut NavigationTree, parent: NavId, top: Vec<SymbolId>) {
    let mut stack: Vec<(SymbolId, NavId)> = top.into_iter().rev().map(|m| (m, parent)).collect();
    while let Some((module, parent)) = stack.pop() {
        let item = add_symbol_node(tree, nav, parent, module);
        let mut children = tree.children_of_kind(module, ReflectionKind::is_module);
        children.sort_by(|a, b| by_full_name(tree, *a, *b));
        stack.extend(children.into_iter().rev().map(|c| (c, item)));
    }
}

fn by_full_name(tree: &SymbolTree, a: SymbolId, b: SymbolId) -> Ordering {
    tree.full_name(a)
        .cmp(&tree.full_name(b))
        .then_with(|| a.cmp(&b))
}

/// Entry for `symbol` with its dedicated urls. Top-level entries show the
/// full name, nested ones the short name.
fn add_symbol_node(tree: &SymbolTree, nav: &mut NavigationTree, parent: NavId, symbol: SymbolId) -> NavId {
    let nested = nav.get(parent).is_some_and(|p| p.parent.is_some());
    let label = if nested {
        tree[symbol].name.clone()
    } else {
        tree.full_name(symbol)
    };

    let mut node = NavigationNode::link(label, tree[symbol].url());
    node.symbol = Some(symbol);
    let urls = dedicated_urls(tree, symbol);
    if !urls.is_empty() {
        node.dedicated_urls = Some(urls);
    }
    nav.add_child(parent, node)
}

/// Urls of the members rendered on `symbol`'s page: every descendant
/// without a page of its own that is not module-like. Descendants with
/// their own page are other pages, so the walk does not enter them.
pub fn dedicated_urls(tree: &SymbolTree, symbol: SymbolId) -> Vec<String> {
    let mut urls = Vec::new();
    let mut stack: Vec<SymbolId> = tree.children(symbol).collect();
    stack.reverse();
    while let Some(id) = stack.pop() {
        let member = &tree[id];
        if member.has_own_document() || member.kind.is_module() {
            continue;
        }
        if !member.url().is_empty() {
            urls.push(member.url().to_string());
        }
        let children: Vec<SymbolId> = tree.children(id).collect();
        stack.extend(children.into_iter().rev());
    }
    urls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderOptions;
    use crate::mapping::MappingTable;
    use crate::partition::partition;
    use docscope_api::{Symbol, SymbolFlags};

    fn external() -> SymbolFlags {
        SymbolFlags {
            is_external: true,
            ..Default::default()
        }
    }

    fn partitioned(tree: &mut SymbolTree) -> SymbolId {
        partition(tree, &MappingTable::default(), &RenderOptions::default()).entry_point
    }

    #[test]
    fn flat_list_with_dividers() {
        let mut tree = SymbolTree::project("P");
        let root = tree.root();
        tree.insert(root, Symbol::new(SymbolId(1), ReflectionKind::Module, "A"))
            .unwrap();
        tree.insert(
            root,
            Symbol::new(SymbolId(2), ReflectionKind::Module, "B").with_flags(external()),
        )
        .unwrap();
        tree.insert(root, Symbol::new(SymbolId(3), ReflectionKind::Module, "C"))
            .unwrap();
        let entry = partitioned(&mut tree);

        let nav = navigation(&tree, entry);
        assert_eq!(
            nav.child_labels(nav.root()),
            vec!["Globals", "Internals", "A", "C", "Externals", "B"]
        );
        let globals = nav.get(nav.children(nav.root())[0]).unwrap();
        assert!(globals.is_globals);
        assert_eq!(globals.url.as_deref(), Some("globals.html"));
        let divider = nav.get(nav.children(nav.root())[1]).unwrap();
        assert!(divider.is_divider());
        assert_eq!(divider.css_classes.as_deref(), Some(DIVIDER_CLASS));
    }

    #[test]
    fn no_dividers_without_externals() {
        let mut tree = SymbolTree::project("P");
        let root = tree.root();
        tree.insert(root, Symbol::new(SymbolId(1), ReflectionKind::Module, "b"))
            .unwrap();
        tree.insert(root, Symbol::new(SymbolId(2), ReflectionKind::Module, "a"))
            .unwrap();
        let entry = partitioned(&mut tree);

        let nav = navigation(&tree, entry);
        assert_eq!(nav.child_labels(nav.root()), vec!["Globals", "a", "b"]);
    }

    #[test]
    fn nested_strategy_above_threshold() {
        let mut tree = SymbolTree::project("P");
        let root = tree.root();
        let outer = tree
            .insert(root, Symbol::new(SymbolId(1), ReflectionKind::Module, "outer"))
            .unwrap();
        let inner = tree
            .insert(outer, Symbol::new(SymbolId(2), ReflectionKind::Module, "inner"))
            .unwrap();
        tree.insert(inner, Symbol::new(SymbolId(3), ReflectionKind::Module, "deep"))
            .unwrap();
        tree.insert(root, Symbol::new(SymbolId(4), ReflectionKind::Module, "alone"))
            .unwrap();
        let entry = partitioned(&mut tree);

        let nav = build_navigation(&tree, entry, 2);
        assert_eq!(nav.child_labels(nav.root()), vec!["Globals", "alone", "outer"]);
        let outer_item = nav.children(nav.root())[2];
        assert_eq!(nav.child_labels(outer_item), vec!["inner"]);
        let inner_item = nav.children(outer_item)[0];
        assert_eq!(nav.child_labels(inner_item), vec!["deep"]);
        assert_eq!(
            nav.get(inner_item).unwrap().url.as_deref(),
            Some("modules/outer.inner.html")
        );
    }

    #[test]
    fn external_module_bounds_scope() {
        let mut tree = SymbolTree::project("P");
        let root = tree.root();
        let ext = tree
            .insert(root, Symbol::new(SymbolId(1), ReflectionKind::ExternalModule, "\"lib\""))
            .unwrap();
        tree.insert(ext, Symbol::new(SymbolId(2), ReflectionKind::Module, "ns"))
            .unwrap();

        assert_eq!(modules_in_scope(&tree, root), vec![SymbolId(1)]);
        assert_eq!(modules_in_scope(&tree, ext), vec![SymbolId(1), SymbolId(2)]);
    }

    #[test]
    fn dedicated_urls_stay_on_page() {
        let mut tree = SymbolTree::project("P");
        let m = tree
            .insert(tree.root(), Symbol::new(SymbolId(1), ReflectionKind::Module, "m"))
            .unwrap();
        let f = tree
            .insert(m, Symbol::new(SymbolId(2), ReflectionKind::Function, "f"))
            .unwrap();
        tree.insert(f, Symbol::new(SymbolId(3), ReflectionKind::CallSignature, "f"))
            .unwrap();
        let c = tree
            .insert(m, Symbol::new(SymbolId(4), ReflectionKind::Class, "C"))
            .unwrap();
        tree.insert(c, Symbol::new(SymbolId(5), ReflectionKind::Method, "run"))
            .unwrap();
        partitioned(&mut tree);

        assert_eq!(
            dedicated_urls(&tree, m),
            vec!["modules/m.html#f".to_string(), "modules/m.html#f.f".to_string()]
        );
    }
}
