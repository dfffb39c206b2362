use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Joins file path and function name in a node identifier.
pub const NODE_SEPARATOR: char = ':';

/// Stable identifier of one function definition: `{file_path}:{name}`.
///
/// External callers key caches on this string, so its format must not change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(file_path: &str, name: &str) -> Self {
        Self(format!("{file_path}{NODE_SEPARATOR}{name}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Function name part. Splits on the last separator since paths may contain one.
    pub fn name(&self) -> &str {
        self.0
            .rsplit_once(NODE_SEPARATOR)
            .map(|(_, name)| name)
            .unwrap_or(&self.0)
    }

    pub fn file_path(&self) -> &str {
        self.0
            .rsplit_once(NODE_SEPARATOR)
            .map(|(path, _)| path)
            .unwrap_or("")
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for NodeId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Directed caller -> callee graph with set semantics on edges.
#[derive(Debug, Clone, Default)]
pub struct CallGraph {
    graph: DiGraph<NodeId, ()>,
    node_map: HashMap<NodeId, NodeIndex>,
}

impl CallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id`, returning the existing index if it is already present.
    pub fn add_node(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&index) = self.node_map.get(&id) {
            return index;
        }
        let index = self.graph.add_node(id.clone());
        self.node_map.insert(id, index);
        index
    }

    /// Adds `caller -> callee`. Returns `None` when either end is unregistered.
    /// Adding an existing edge leaves the edge count unchanged.
    pub fn add_edge(&mut self, caller: &NodeId, callee: &NodeId) -> Option<EdgeIndex> {
        let source = *self.node_map.get(caller)?;
        let target = *self.node_map.get(callee)?;
        Some(self.graph.update_edge(source, target, ()))
    }

    /// The graph-owned copy of `id`, if registered.
    pub fn node(&self, id: &NodeId) -> Option<&NodeId> {
        self.node_map.get(id).map(|&index| &self.graph[index])
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.node_map.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn has_edge(&self, caller: &NodeId, callee: &NodeId) -> bool {
        match (self.node_map.get(caller), self.node_map.get(callee)) {
            (Some(&source), Some(&target)) => self.graph.contains_edge(source, target),
            _ => false,
        }
    }

    /// Direct callees of `id`, ordered by identifier.
    pub fn callees(&self, id: &NodeId) -> Vec<&NodeId> {
        let Some(&index) = self.node_map.get(id) else {
            return Vec::new();
        };
        let mut callees: Vec<&NodeId> = self
            .graph
            .neighbors_directed(index, Direction::Outgoing)
            .map(|target| &self.graph[target])
            .collect();
        callees.sort();
        callees
    }

    /// Direct callers of `id`, ordered by identifier.
    pub fn callers(&self, id: &NodeId) -> Vec<&NodeId> {
        let Some(&index) = self.node_map.get(id) else {
            return Vec::new();
        };
        let mut callers: Vec<&NodeId> = self
            .graph
            .neighbors_directed(index, Direction::Incoming)
            .map(|source| &self.graph[source])
            .collect();
        callers.sort();
        callers
    }

    /// All node identifiers, sorted.
    pub fn node_ids(&self) -> Vec<&NodeId> {
        let mut ids: Vec<&NodeId> = self.graph.node_weights().collect();
        ids.sort();
        ids
    }

    /// All edges as `(caller, callee)`, sorted.
    pub fn edges(&self) -> Vec<(&NodeId, &NodeId)> {
        let mut edges: Vec<(&NodeId, &NodeId)> = self
            .graph
            .edge_references()
            .map(|edge| (&self.graph[edge.source()], &self.graph[edge.target()]))
            .collect();
        edges.sort();
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_splits_on_last_separator() {
        let id = NodeId::new("C:/app/server.js", "readBookings");
        assert_eq!(id.as_str(), "C:/app/server.js:readBookings");
        assert_eq!(id.name(), "readBookings");
        assert_eq!(id.file_path(), "C:/app/server.js");
    }

    #[test]
    fn repeated_edges_collapse() {
        let mut graph = CallGraph::new();
        let a = NodeId::new("a.js", "a");
        let b = NodeId::new("a.js", "b");
        graph.add_node(a.clone());
        graph.add_node(b.clone());
        graph.add_node(b.clone());

        assert!(graph.add_edge(&a, &b).is_some());
        assert!(graph.add_edge(&a, &b).is_some());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.callers(&b), vec![&a]);
    }

    #[test]
    fn edge_to_unregistered_node_is_refused() {
        let mut graph = CallGraph::new();
        let a = NodeId::new("a.js", "a");
        graph.add_node(a.clone());
        assert!(graph.add_edge(&a, &NodeId::from("missing")).is_none());
        assert_eq!(graph.edge_count(), 0);
    }
}
