//! The documentation phase, run between symbol resolution and rendering.
//!
//! [`DocumentationPhase::on_resolve_end`] moves comment fragments to the
//! symbols they describe. [`DocumentationPhase::on_render_begin`] assigns
//! output locations, groups, navigation and presentation tokens, and returns
//! the pages to render. Both are deterministic and can be re-run over their
//! own output without changing it.

use crate::classify::classify;
use crate::comments::{PropagationReport, propagate_comments};
use crate::config::RenderOptions;
use crate::groups::assign_groups;
use crate::mapping::MappingTable;
use crate::navigation::navigation;
use crate::partition::partition;
use crate::tree::SymbolTree;
use docscope_api::{DocumentRecord, NavigationTree, SymbolGroup, SymbolId};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone)]
pub struct DocumentationPhase {
    options: RenderOptions,
    mappings: MappingTable,
}

impl Default for DocumentationPhase {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Everything the renderer needs besides the tree itself.
#[derive(Debug, Clone, Serialize)]
pub struct RenderPlan {
    pub entry_point: SymbolId,
    pub documents: Vec<DocumentRecord>,
    pub navigation: NavigationTree,
    /// Groups of every container that has any, in tree order.
    pub groups: IndexMap<SymbolId, Vec<SymbolGroup>>,
}

impl DocumentationPhase {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            mappings: MappingTable::default(),
        }
    }

    pub fn with_mappings(mut self, mappings: MappingTable) -> Self {
        self.mappings = mappings;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Comment propagation. Runs once all symbols are resolved.
    pub fn on_resolve_end(&self, tree: &mut SymbolTree) -> PropagationReport {
        let report = propagate_comments(tree);
        info!("Resolve end: {} comment fragments moved", report.moved());
        report
    }

    /// Partition, group, navigation and classification, in that order.
    pub fn on_render_begin(&self, tree: &mut SymbolTree) -> RenderPlan {
        let partition = partition(tree, &self.mappings, &self.options);
        assign_groups(tree);
        let navigation = navigation(tree, partition.entry_point);
        classify(tree);

        let groups = tree
            .descendants(tree.root())
            .into_iter()
            .filter(|id| !tree[*id].groups.is_empty())
            .map(|id| (id, tree[id].groups.clone()))
            .collect();

        info!(
            "Render begin: {} documents, {} navigation nodes",
            partition.documents.len(),
            navigation.len()
        );
        RenderPlan {
            entry_point: partition.entry_point,
            documents: partition.documents,
            navigation,
            groups,
        }
    }
}

/// Output fields of one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolOutput {
    pub id: SymbolId,
    pub url: String,
    pub anchor: String,
    pub has_own_document: bool,
    pub css_classes: String,
}

/// Serializable result of running both hooks over a project.
#[derive(Debug, Clone, Serialize)]
pub struct PlanOutput {
    pub report: PropagationReport,
    pub plan: RenderPlan,
    pub symbols: Vec<SymbolOutput>,
}

impl PlanOutput {
    pub fn collect(tree: &SymbolTree, report: PropagationReport, plan: RenderPlan) -> Self {
        let symbols = tree
            .descendants(tree.root())
            .into_iter()
            .map(|id| {
                let symbol = &tree[id];
                SymbolOutput {
                    id,
                    url: symbol.output.url.clone(),
                    anchor: symbol.output.anchor.clone(),
                    has_own_document: symbol.output.has_own_document,
                    css_classes: symbol.output.css_classes.clone(),
                }
            })
            .collect();
        Self {
            report,
            plan,
            symbols,
        }
    }
}

/// Run both hooks over `tree` and gather the result.
pub fn run(phase: &DocumentationPhase, tree: &mut SymbolTree) -> PlanOutput {
    let report = phase.on_resolve_end(tree);
    let plan = phase.on_render_begin(tree);
    PlanOutput::collect(tree, report, plan)
}
