pub mod analyzer;
pub mod assembler;
pub mod builder;
pub mod graph;
pub mod resolver;
pub mod scanner;
pub mod slicer;
pub mod symbols;

pub use analyzer::CallGraphAnalyzer;
pub use builder::{GraphBuilder, GraphSnapshot};
pub use graph::{CallGraph, NodeId, NODE_SEPARATOR};
pub use resolver::FunctionResolver;
pub use scanner::FileScanner;
pub use symbols::SymbolTable;
