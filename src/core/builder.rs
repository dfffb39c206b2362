use log::{debug, info, warn};

use super::graph::{CallGraph, NodeId};
use super::resolver::FunctionResolver;
use super::symbols::SymbolTable;
use crate::config::GraphConfig;
use crate::facts::{EntryPoint, FactStore, FileFacts, FunctionDefinition};

/// Everything produced by one build: facts, symbols and the resolved graph.
///
/// A snapshot is never mutated after [`GraphBuilder::build`] returns; a new
/// build produces a new snapshot.
#[derive(Debug, Clone, Default)]
pub struct GraphSnapshot {
    pub(crate) config: GraphConfig,
    pub(crate) facts: FactStore,
    pub(crate) symbols: SymbolTable,
    pub(crate) graph: CallGraph,
}

impl GraphSnapshot {
    pub fn empty(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn facts(&self) -> &FactStore {
        &self.facts
    }

    pub fn graph(&self) -> &CallGraph {
        &self.graph
    }

    pub fn resolver(&self) -> FunctionResolver<'_> {
        FunctionResolver::new(&self.facts, &self.symbols, &self.config)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn definition(&self, id: &NodeId) -> Option<&FunctionDefinition> {
        self.symbols.get(id)
    }

    pub fn entry_points(&self) -> impl Iterator<Item = &EntryPoint> {
        self.facts.entry_points()
    }
}

/// Two-phase graph construction.
///
/// Phase 1 registers every definition of every file; phase 2 resolves call
/// sites into edges. Callees defined in files that come later in the input
/// are therefore always visible, and the edge set does not depend on file order.
pub struct GraphBuilder {
    config: GraphConfig,
}

impl GraphBuilder {
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    pub fn build<I>(&self, files: I) -> GraphSnapshot
    where
        I: IntoIterator<Item = FileFacts>,
    {
        let mut snapshot = GraphSnapshot::empty(self.config.clone());
        snapshot.facts = FactStore::from_files(files);

        self.register_nodes(&mut snapshot);
        let edges = self.resolve_edges(&snapshot);

        let mut added = 0usize;
        for (caller, callee) in edges {
            if snapshot.graph.add_edge(&caller, &callee).is_some() {
                added += 1;
            }
        }

        info!(
            "Built call graph: {} files, {} nodes, {} edges ({} resolved calls)",
            snapshot.facts.file_count(),
            snapshot.node_count(),
            snapshot.edge_count(),
            added
        );
        snapshot
    }

    fn register_nodes(&self, snapshot: &mut GraphSnapshot) {
        let GraphSnapshot {
            facts,
            symbols,
            graph,
            ..
        } = snapshot;

        for file in facts.files() {
            for definition in facts.definitions(file) {
                let id = NodeId::new(&definition.file_path, &definition.name);
                graph.add_node(id.clone());
                if let Some(previous) = symbols.insert(id.clone(), definition.clone()) {
                    warn!(
                        "Duplicate definition {} (lines {}-{} replaced by {}-{})",
                        id,
                        previous.start_line,
                        previous.end_line,
                        definition.start_line,
                        definition.end_line
                    );
                }
            }
        }
    }

    fn resolve_edges(&self, snapshot: &GraphSnapshot) -> Vec<(NodeId, NodeId)> {
        let resolver = snapshot.resolver();
        let mut edges = Vec::new();

        for file in snapshot.facts.files() {
            for call in snapshot.facts.calls(file) {
                let Some(caller) = resolver.resolve_caller(call) else {
                    debug!(
                        "Skipping call to {} at {}:{}: no enclosing function",
                        call.callee_name, call.file_path, call.line
                    );
                    continue;
                };
                let Some(callee) = resolver.resolve_callee(call) else {
                    debug!(
                        "Unresolved call to {} at {}:{}",
                        call.callee_name, call.file_path, call.line
                    );
                    continue;
                };
                edges.push((caller, callee));
            }
        }

        edges
    }
}
