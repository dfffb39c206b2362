use super::builder::{GraphBuilder, GraphSnapshot};
use super::graph::NodeId;
use crate::config::GraphConfig;
use crate::facts::{EntryPoint, FileFacts, FunctionDefinition};

/// Entry point for downstream consumers: build once, then query.
///
/// Each call to [`CallGraphAnalyzer::build_graph`] replaces the previous
/// snapshot wholesale; nothing carries over between builds.
pub struct CallGraphAnalyzer {
    config: GraphConfig,
    snapshot: GraphSnapshot,
}

impl CallGraphAnalyzer {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            snapshot: GraphSnapshot::empty(config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn build_graph<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = FileFacts>,
    {
        self.snapshot = GraphBuilder::new(self.config.clone()).build(files);
    }

    pub fn snapshot(&self) -> &GraphSnapshot {
        &self.snapshot
    }

    pub fn node_count(&self) -> usize {
        self.snapshot.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.snapshot.edge_count()
    }

    pub fn slice(&self, id: &NodeId, depth: usize) -> Vec<FunctionDefinition> {
        self.snapshot.slice(id, depth)
    }

    pub fn route_context(&self, entry_point: &EntryPoint, depth: usize) -> String {
        self.snapshot.route_context(entry_point, depth)
    }

    /// [`Self::route_context`] at the configured default depth.
    pub fn route_context_default(&self, entry_point: &EntryPoint) -> String {
        self.route_context(entry_point, self.config.default_depth)
    }

    /// Every entry point as a `## METHOD pattern` section with its middleware
    /// and route context at the default depth.
    pub fn route_report(&self) -> String {
        let mut out = String::new();
        for entry_point in self.snapshot.entry_points() {
            out.push_str(&format!("## {}\n", entry_point.label()));
            if !entry_point.middleware.is_empty() {
                out.push_str(&format!(
                    "Middleware: {}\n",
                    entry_point.middleware.join(", ")
                ));
            }
            out.push('\n');
            out.push_str(&self.route_context_default(entry_point));
            out.push('\n');
        }
        out
    }

    pub fn entry_points(&self) -> Vec<&EntryPoint> {
        self.snapshot.entry_points().collect()
    }

    pub fn callees(&self, id: &NodeId) -> Vec<&NodeId> {
        self.snapshot.graph().callees(id)
    }

    pub fn definition(&self, id: &NodeId) -> Option<&FunctionDefinition> {
        self.snapshot.definition(id)
    }
}

impl Default for CallGraphAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
