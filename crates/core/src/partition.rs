//! Decides which symbols get a page and gives every symbol its url.
//!
//! Walks the entry point's subtree depth-first. A symbol matched by a
//! [`MappingTable`] rule gets `<directory>/<dotted.alias.path>.html`; any
//! other symbol, and everything below a leaf rule, becomes an anchor on the
//! nearest page above it. Records come out in pre-order, so the same tree
//! always yields the same list. Page urls and the anchors on one page are
//! made unique with `-N` suffixes in that same order.

use crate::config::{INDEX_URL, RenderOptions};
use crate::mapping::MappingTable;
use crate::naming::{AliasTable, contributes_segment, join_path};
use crate::tree::SymbolTree;
use docscope_api::{DocumentRecord, INDEX_TEMPLATE, REFLECTION_TEMPLATE, SymbolId};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

static URL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(http|ftp)s?://").expect("url prefix pattern is valid"));

/// Urls pointing at another site are kept as assigned upstream.
pub fn is_external_url(url: &str) -> bool {
    URL_PREFIX.is_match(url)
}

#[derive(Debug, Clone, Serialize)]
pub struct Partition {
    pub entry_point: SymbolId,
    pub documents: Vec<DocumentRecord>,
}

/// Container configured as the site root, or the project root when the
/// configured path does not resolve to one.
pub fn resolve_entry_point(tree: &SymbolTree, options: &RenderOptions) -> SymbolId {
    let Some(name) = options.entry_point.as_deref() else {
        return tree.root();
    };
    match tree.resolve_path(name) {
        Some(id) if tree[id].kind.is_container() => id,
        Some(id) => {
            warn!(
                "Entry point \"{}\" is a {} and cannot hold pages, using the project root",
                name, tree[id].kind
            );
            tree.root()
        }
        None => {
            warn!("Could not find the entry point \"{}\"", name);
            tree.root()
        }
    }
}

/// Assign url, anchor and page ownership to the entry point's subtree and
/// list the pages to render.
pub fn partition(tree: &mut SymbolTree, table: &MappingTable, options: &RenderOptions) -> Partition {
    let entry = resolve_entry_point(tree, options);
    reset_output(tree);

    let aliases = AliasTable::build(tree);
    let mut partitioner = Partitioner {
        table,
        aliases: &aliases,
        documents: Vec::new(),
        page_urls: HashSet::new(),
        anchors: HashMap::new(),
    };

    let root = tree.root();
    if options.readme {
        partitioner.page_urls.insert(INDEX_URL.to_string());
        partitioner
            .documents
            .push(DocumentRecord::new(INDEX_URL, root, INDEX_TEMPLATE));
        if root != entry {
            set_page(tree, root, INDEX_URL.to_string());
        }
    }
    let entry_url = options.entry_url();
    partitioner.page_urls.insert(entry_url.to_string());
    set_page(tree, entry, entry_url.to_string());
    partitioner
        .documents
        .push(DocumentRecord::new(entry_url, entry, REFLECTION_TEMPLATE));

    let base = aliases.prefix(tree, entry);
    let mut stack: Vec<Frame> = tree
        .children(entry)
        .map(|child| Frame {
            id: child,
            pages: tree[child].kind.is_declaration(),
            page: entry,
            root_base: base.clone(),
            page_base: String::new(),
        })
        .collect();
    stack.reverse();
    while let Some(frame) = stack.pop() {
        let children = partitioner.place(tree, frame);
        stack.extend(children.into_iter().rev());
    }

    info!(
        "Partitioned {} symbols into {} documents",
        tree.descendants(entry).len(),
        partitioner.documents.len()
    );
    Partition {
        entry_point: entry,
        documents: partitioner.documents,
    }
}

/// A symbol waiting to be placed, with the paths its ancestors contribute.
struct Frame {
    id: SymbolId,
    /// A mapping rule may still give this symbol a page.
    pages: bool,
    /// Page the symbol is anchored on when it gets none of its own.
    page: SymbolId,
    /// Dotted path from the project root, for page urls.
    root_base: String,
    /// Dotted path below `page`, for anchors.
    page_base: String,
}

struct Partitioner<'a> {
    table: &'a MappingTable,
    aliases: &'a AliasTable,
    documents: Vec<DocumentRecord>,
    page_urls: HashSet<String>,
    anchors: HashMap<SymbolId, HashSet<String>>,
}

impl Partitioner<'_> {
    /// Give `frame.id` a page or an anchor and return its children's frames
    /// in tree order.
    fn place(&mut self, tree: &mut SymbolTree, frame: Frame) -> Vec<Frame> {
        let id = frame.id;
        let segment = self.aliases.segment(tree, id);
        let contributes = contributes_segment(&tree[id]);
        let table = self.table;
        let rule = if frame.pages { table.lookup(tree[id].kind) } else { None };

        if let Some(rule) = rule {
            let path = join_path(&frame.root_base, &segment);
            if is_external_url(tree[id].url()) {
                mark_external_page(tree, id);
            } else {
                let url = self.unique_page_url(&format!("{}/{}", rule.directory, path));
                debug!("Document {} -> {}", path, url);
                self.documents
                    .push(DocumentRecord::new(url.clone(), id, rule.template.clone()));
                set_page(tree, id, url);
            }
            let root_base = if contributes { path } else { frame.root_base };
            return tree
                .children(id)
                .map(|child| Frame {
                    id: child,
                    pages: !rule.is_leaf,
                    page: id,
                    root_base: root_base.clone(),
                    page_base: String::new(),
                })
                .collect();
        }

        let path = join_path(&frame.page_base, &segment);
        let mut page = frame.page;
        let mut page_base = if contributes { path.clone() } else { frame.page_base };
        if is_external_url(tree[id].url()) {
            // An absolute url is a page elsewhere; members anchor on it.
            mark_external_page(tree, id);
            page = id;
            page_base = String::new();
        } else {
            let anchor = if tree[id].flags.is_static {
                format!("static-{}", path)
            } else {
                path
            };
            let anchor = self.unique_anchor(page, anchor);
            let url = format!("{}#{}", tree[page].url(), anchor);
            if let Some(symbol) = tree.get_mut(id) {
                symbol.output.url = url;
                symbol.output.anchor = anchor;
                symbol.output.has_own_document = false;
            }
        }

        tree.children(id)
            .map(|child| Frame {
                id: child,
                pages: false,
                page,
                root_base: String::new(),
                page_base: page_base.clone(),
            })
            .collect()
    }

    /// `<stem>.html`, or `<stem>-N.html` when an earlier page took it.
    fn unique_page_url(&mut self, stem: &str) -> String {
        let mut url = format!("{}.html", stem);
        let mut index = 0;
        while self.page_urls.contains(&url) {
            index += 1;
            url = format!("{}-{}.html", stem, index);
        }
        self.page_urls.insert(url.clone());
        url
    }

    fn unique_anchor(&mut self, page: SymbolId, anchor: String) -> String {
        let taken = self.anchors.entry(page).or_default();
        let mut unique = anchor.clone();
        let mut index = 0;
        while taken.contains(&unique) {
            index += 1;
            unique = format!("{}-{}", anchor, index);
        }
        taken.insert(unique.clone());
        unique
    }
}

/// Nearest ancestor that owns a page.
pub fn owning_page(tree: &SymbolTree, id: SymbolId) -> Option<SymbolId> {
    tree.ancestors(id).find(|a| tree[*a].has_own_document())
}

fn set_page(tree: &mut SymbolTree, id: SymbolId, url: String) {
    if let Some(symbol) = tree.get_mut(id) {
        symbol.output.url = url;
        symbol.output.anchor.clear();
        symbol.output.has_own_document = true;
    }
}

fn mark_external_page(tree: &mut SymbolTree, id: SymbolId) {
    if let Some(symbol) = tree.get_mut(id) {
        symbol.output.has_own_document = true;
        symbol.output.anchor.clear();
    }
}

/// Clear locations left by an earlier run. Absolute urls assigned upstream
/// carry no anchor and are kept; anchors derived from them are rebuilt.
fn reset_output(tree: &mut SymbolTree) {
    for symbol in tree.iter_mut() {
        if is_external_url(&symbol.output.url) && symbol.output.anchor.is_empty() {
            continue;
        }
        symbol.output.url.clear();
        symbol.output.anchor.clear();
        symbol.output.has_own_document = false;
    }
}
