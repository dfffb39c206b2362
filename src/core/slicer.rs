use std::collections::{HashSet, VecDeque};

use super::builder::GraphSnapshot;
use super::graph::NodeId;
use crate::facts::FunctionDefinition;

impl GraphSnapshot {
    /// Definitions reachable from `id` within `depth` call hops, start node first.
    ///
    /// Breadth-first; each node is visited once, so cycles terminate. Successors
    /// of a node are visited in identifier order. Unknown ids yield an empty slice.
    pub fn slice(&self, id: &NodeId, depth: usize) -> Vec<FunctionDefinition> {
        self.reachable_nodes(id, depth)
            .into_iter()
            .filter_map(|node| self.symbols.get(node).cloned())
            .collect()
    }

    /// Node ids in visit order, paired with the slice produced by [`Self::slice`].
    pub fn reachable_nodes<'a>(&'a self, id: &NodeId, depth: usize) -> Vec<&'a NodeId> {
        let Some(start) = self.graph.node(id) else {
            return Vec::new();
        };

        let mut visited: HashSet<&NodeId> = HashSet::from([start]);
        let mut queue: VecDeque<(&NodeId, usize)> = VecDeque::from([(start, 0)]);
        let mut order = Vec::new();

        while let Some((current, hops)) = queue.pop_front() {
            order.push(current);
            if hops >= depth {
                continue;
            }
            for next in self.graph.callees(current) {
                if visited.insert(next) {
                    queue.push_back((next, hops + 1));
                }
            }
        }

        order
    }
}
