use anyhow::Result;
use serde_json::json;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::{GraphSnapshot, NodeId};

/// Compact JSON dump of the call graph, stable across runs.
pub struct JsonCompactFormatter {
    /// Emit line ranges and full ids, or just names and file ids
    minimal: bool,
}

impl JsonCompactFormatter {
    pub fn new() -> Self {
        Self { minimal: true }
    }

    pub fn full() -> Self {
        Self { minimal: false }
    }

    pub fn format_to_file(&self, snapshot: &GraphSnapshot, output_path: &Path) -> Result<()> {
        let json_content = self.format_graph(snapshot)?;
        fs::write(output_path, json_content)?;
        Ok(())
    }

    pub fn format_graph(&self, snapshot: &GraphSnapshot) -> Result<String> {
        let graph = snapshot.graph();
        let node_ids = graph.node_ids();

        // File ids in first-seen order over sorted nodes
        let mut files: Vec<&str> = Vec::new();
        let mut file_map: HashMap<&str, usize> = HashMap::new();
        for id in &node_ids {
            let path = snapshot
                .definition(id)
                .map(|definition| definition.file_path.as_str())
                .unwrap_or_else(|| id.file_path());
            if !file_map.contains_key(path) {
                file_map.insert(path, files.len());
                files.push(path);
            }
        }

        let mut node_index: HashMap<&NodeId, usize> = HashMap::with_capacity(node_ids.len());
        let mut nodes = Vec::with_capacity(node_ids.len());
        for (position, id) in node_ids.iter().enumerate() {
            node_index.insert(*id, position);
            let Some(definition) = snapshot.definition(id) else {
                continue;
            };
            let file_id = file_map[definition.file_path.as_str()];

            let node_json = if self.minimal {
                json!({
                    "n": definition.name,
                    "f": file_id,
                    "s": definition.start_line,
                    "e": definition.end_line
                })
            } else {
                json!({
                    "id": id.as_str(),
                    "name": definition.name,
                    "file": file_id,
                    "start": definition.start_line,
                    "end": definition.end_line,
                    "callees": graph.callees(id).len()
                })
            };
            nodes.push(node_json);
        }

        let edges: Vec<_> = graph
            .edges()
            .into_iter()
            .filter_map(|(caller, callee)| {
                let src = node_index.get(caller)?;
                let tgt = node_index.get(callee)?;
                Some(json!([src, tgt]))
            })
            .collect();

        let output = json!({
            "meta": {
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "format": if self.minimal { "compact" } else { "full" }
            },
            "files": files,
            "nodes": nodes,
            "edges": edges
        });

        Ok(serde_json::to_string(&output)?)
    }
}

impl Default for JsonCompactFormatter {
    fn default() -> Self {
        Self::new()
    }
}
