use log::debug;
use std::collections::HashSet;

use super::builder::GraphSnapshot;
use super::graph::NodeId;
use crate::facts::{CallSite, EntryPoint, FunctionDefinition};
use crate::formatters::{ContextBlock, ContextFormatter};

impl GraphSnapshot {
    /// Call sites lexically inside the handler, in call order.
    pub fn handler_calls(&self, entry_point: &EntryPoint) -> Vec<&CallSite> {
        let mut calls: Vec<&CallSite> = self
            .facts
            .calls(&entry_point.file_path)
            .iter()
            .filter(|call| entry_point.contains_line(call.line))
            .collect();
        calls.sort_by_key(|call| call.line);
        calls
    }

    /// Union of the slices of every locally resolvable call in the handler,
    /// deduplicated by node and kept in first-seen order.
    pub fn route_definitions(
        &self,
        entry_point: &EntryPoint,
        depth: usize,
    ) -> Vec<&FunctionDefinition> {
        let resolver = self.resolver();
        let mut seen: HashSet<&NodeId> = HashSet::new();
        let mut collected = Vec::new();

        for call in self.handler_calls(entry_point) {
            let Some(target) = resolver.resolve_callee(call) else {
                continue;
            };
            for node in self.reachable_nodes(&target, depth) {
                if !seen.insert(node) {
                    continue;
                }
                if let Some(definition) = self.symbols.get(node) {
                    collected.push(definition);
                }
            }
        }

        collected
    }

    /// Source context for one entry point. Never empty: when nothing in the
    /// handler resolves locally, the handler's own source is returned.
    pub fn route_context(&self, entry_point: &EntryPoint, depth: usize) -> String {
        let formatter = ContextFormatter::new();
        let definitions = self.route_definitions(entry_point, depth);

        if definitions.is_empty() {
            debug!(
                "No resolvable calls in {}; falling back to handler source",
                entry_point.label()
            );
            return formatter.render(&[ContextBlock::from(entry_point)]);
        }

        let blocks: Vec<ContextBlock<'_>> = definitions
            .into_iter()
            .map(ContextBlock::from)
            .collect();
        formatter.render(&blocks)
    }
}
