use std::collections::HashMap;

use super::graph::NodeId;
use crate::facts::FunctionDefinition;

/// Node identifier -> definition payload.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<NodeId, FunctionDefinition>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `definition`, returning the one it replaced if the id was taken.
    pub fn insert(
        &mut self,
        id: NodeId,
        definition: FunctionDefinition,
    ) -> Option<FunctionDefinition> {
        self.symbols.insert(id, definition)
    }

    pub fn get(&self, id: &NodeId) -> Option<&FunctionDefinition> {
        self.symbols.get(id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.symbols.contains_key(id)
    }
}
