//! Hands `@param`/`@typeparam` fragments down to the symbols they describe.
//!
//! A fragment written on an ancestor and addressed by a dotted path relative
//! to that ancestor (`@param bar.x` on class `Foo` for parameter `x` of
//! `Foo.bar`) is detached from the ancestor and becomes the comment of the
//! addressed symbol. The nearest ancestor with a matching fragment wins.

use crate::naming::contributes_segment;
use crate::tree::SymbolTree;
use docscope_api::{Comment, ReflectionKind, SymbolId};
use serde::Serialize;
use tracing::{debug, info};

pub const PARAM_TAG: &str = "param";
pub const TYPEPARAM_TAG: &str = "typeparam";

/// A fragment moved from `from` to `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimedFragment {
    pub from: SymbolId,
    pub to: SymbolId,
    pub param_name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PropagationReport {
    pub claimed: Vec<ClaimedFragment>,
}

impl PropagationReport {
    pub fn moved(&self) -> usize {
        self.claimed.len()
    }
}

/// Give every uncommented symbol the fragment addressed to it, if any.
pub fn propagate_comments(tree: &mut SymbolTree) -> PropagationReport {
    let mut report = PropagationReport::default();
    let mut pending = pending_fragments(tree);

    for id in tree.descendants(tree.root()) {
        if pending == 0 {
            break;
        }
        if tree[id].comment.is_some() {
            continue;
        }
        let Some((owner, index)) = find_fragment(tree, id) else {
            continue;
        };
        let Some(tag) = tree
            .get_mut(owner)
            .and_then(|s| s.comment.as_mut())
            .map(|c| c.tags.remove(index))
        else {
            continue;
        };

        pending -= 1;
        debug!(
            "Moved @{} {} from {} to {}",
            tag.tag_name, tag.param_name, owner, id
        );
        report.claimed.push(ClaimedFragment {
            from: owner,
            to: id,
            param_name: tag.param_name.clone(),
        });
        if let Some(symbol) = tree.get_mut(id) {
            symbol.comment = Some(Comment::claimed(tag.text));
        }
    }

    info!("Comment propagation moved {} fragments", report.moved());
    report
}

/// Number of `@param`/`@typeparam` tags anywhere in the tree.
fn pending_fragments(tree: &SymbolTree) -> usize {
    tree.iter()
        .filter_map(|s| s.comment.as_ref())
        .flat_map(|c| c.tags.iter())
        .filter(|t| t.tag_name == PARAM_TAG || t.tag_name == TYPEPARAM_TAG)
        .count()
}

/// Locate the fragment addressed to `id`: the owning ancestor and the
/// fragment's position in its tag list.
///
/// Every ancestor's comment is checked, including signatures that add
/// nothing to the dotted path.
pub fn find_fragment(tree: &SymbolTree, id: SymbolId) -> Option<(SymbolId, usize)> {
    let symbol = tree.get(id)?;
    let type_parameter =
        (symbol.kind == ReflectionKind::TypeParameter).then_some(symbol.original_name.as_str());

    let mut segments: Vec<&str> = Vec::new();
    if contributes_segment(symbol) {
        segments.push(&symbol.original_name);
    }

    for ancestor in tree.ancestors(id) {
        let owner = &tree[ancestor];
        if let Some(comment) = &owner.comment {
            if let Some(index) = match_fragment(comment, type_parameter, &segments) {
                return Some((ancestor, index));
            }
        }
        if contributes_segment(owner) {
            segments.push(&owner.original_name);
        }
    }
    None
}

fn match_fragment(comment: &Comment, type_parameter: Option<&str>, segments: &[&str]) -> Option<usize> {
    if let Some(name) = type_parameter {
        if let Some(index) = comment.tag_index(TYPEPARAM_TAG, name) {
            return Some(index);
        }
        if let Some(index) = comment.tag_index(PARAM_TAG, &format!("<{}>", name)) {
            return Some(index);
        }
    }
    if segments.is_empty() {
        return None;
    }
    let path = segments
        .iter()
        .rev()
        .copied()
        .collect::<Vec<_>>()
        .join(".");
    comment.tag_index(PARAM_TAG, &path)
}
