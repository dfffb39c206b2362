//! # CALLSLICE
//!
//! Cross-file call graph construction and bounded-depth context slicing.
//!
//! CALLSLICE consumes per-file static facts (function definitions, call sites,
//! import bindings and route handlers) produced by an external extractor,
//! links them into a caller -> callee graph, and assembles the transitive
//! call-chain source for each handler so a downstream analyzer sees exactly
//! the code a request can reach.
//!
//! ## Pipeline
//!
//! ```text
//! FileFacts[] ──> FactStore ──> GraphBuilder (phase 1: nodes, phase 2: edges)
//!                                   │
//!                                   └──> GraphSnapshot ──> slice / route_context
//! ```
//!
//! Node identifiers have the form `{file_path}:{function_name}`.

pub mod config;
pub mod core;
pub mod error;
pub mod facts;
pub mod formatters;

pub use crate::config::GraphConfig;
pub use crate::core::{CallGraphAnalyzer, GraphSnapshot, NodeId};
pub use crate::error::{Result, SliceError};
pub use crate::facts::{CallSite, EntryPoint, FileFacts, FunctionDefinition, ImportBinding};
