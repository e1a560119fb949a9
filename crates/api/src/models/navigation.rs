use super::symbol::SymbolId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a node inside a [`NavigationTree`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(transparent)]
pub struct NavId(pub usize);

impl fmt::Display for NavId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct NavigationNode {
    pub label: String,
    /// `None` for non-clickable dividers.
    pub url: Option<String>,
    pub parent: Option<NavId>,
    pub children: Vec<NavId>,
    /// Symbol this entry was built from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<SymbolId>,
    #[serde(default)]
    pub is_globals: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_classes: Option<String>,
    /// Anchor urls of the members rendered on this entry's page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_urls: Option<Vec<String>>,
}

impl NavigationNode {
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn divider(label: impl Into<String>, css_classes: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            css_classes: Some(css_classes.into()),
            ..Default::default()
        }
    }

    pub fn is_divider(&self) -> bool {
        self.url.is_none()
    }
}

/// Site hierarchy. Node 0 is the root.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct NavigationTree {
    nodes: Vec<NavigationNode>,
}

impl NavigationTree {
    pub fn new(root: NavigationNode) -> Self {
        Self {
            nodes: vec![NavigationNode {
                parent: None,
                children: Vec::new(),
                ..root
            }],
        }
    }

    pub fn root(&self) -> NavId {
        NavId(0)
    }

    pub fn get(&self, id: NavId) -> Option<&NavigationNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NavId) -> Option<&mut NavigationNode> {
        self.nodes.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append `node` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NavId, node: NavigationNode) -> NavId {
        let id = NavId(self.nodes.len());
        self.nodes.push(NavigationNode {
            parent: Some(parent),
            children: Vec::new(),
            ..node
        });
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(id);
        }
        id
    }

    pub fn children(&self, id: NavId) -> &[NavId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Labels of the direct children of `id`, in order.
    pub fn child_labels(&self, id: NavId) -> Vec<&str> {
        self.children(id)
            .iter()
            .filter_map(|c| self.get(*c))
            .map(|n| n.label.as_str())
            .collect()
    }

    /// Node ids in pre-order, starting at the root.
    pub fn preorder(&self) -> Vec<NavId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Chain of nodes from the root down to the entry that renders `url`.
    ///
    /// An entry renders a url when it links to it or lists it among its
    /// dedicated urls. Empty when no entry matches.
    pub fn path_to(&self, url: &str) -> Vec<NavId> {
        let Some(target) = self.preorder().into_iter().find(|id| {
            self.get(*id).is_some_and(|n| {
                n.url.as_deref() == Some(url)
                    || n
                        .dedicated_urls
                        .as_ref()
                        .is_some_and(|urls| urls.iter().any(|u| u == url))
            })
        }) else {
            return Vec::new();
        };

        let mut path = vec![target];
        let mut current = self.get(target).and_then(|n| n.parent);
        while let Some(id) = current {
            path.push(id);
            current = self.get(id).and_then(|n| n.parent);
        }
        path.reverse();
        path
    }
}
