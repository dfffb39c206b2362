//! Static facts handed to the graph by the external syntax extractor.

pub mod loader;
pub mod store;

use serde::{Deserialize, Serialize};

pub use loader::load_fact_files;
pub use store::FactStore;

/// A named function definition with its inclusive, 1-indexed line range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub file_path: String,
    pub start_line: usize,
    pub end_line: usize,
    pub source: String,
}

impl FunctionDefinition {
    pub fn new(
        name: impl Into<String>,
        file_path: impl Into<String>,
        start_line: usize,
        end_line: usize,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            file_path: file_path.into(),
            start_line,
            end_line,
            source: source.into(),
        }
    }

    pub fn contains_line(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    pub fn span(&self) -> usize {
        self.end_line.saturating_sub(self.start_line)
    }
}

/// A call expression: `name()` or `receiver.name()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    pub callee_name: String,
    pub file_path: String,
    pub line: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_name: Option<String>,
}

impl CallSite {
    pub fn new(callee_name: impl Into<String>, file_path: impl Into<String>, line: usize) -> Self {
        Self {
            callee_name: callee_name.into(),
            file_path: file_path.into(),
            line,
            receiver_name: None,
        }
    }

    pub fn with_receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver_name = Some(receiver.into());
        self
    }
}

/// A `require()` or `import` statement binding a local name to a module specifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportBinding {
    pub bound_name: String,
    pub path_specifier: String,
    pub file_path: String,
    pub line: usize,
}

impl ImportBinding {
    pub fn new(
        bound_name: impl Into<String>,
        path_specifier: impl Into<String>,
        file_path: impl Into<String>,
        line: usize,
    ) -> Self {
        Self {
            bound_name: bound_name.into(),
            path_specifier: path_specifier.into(),
            file_path: file_path.into(),
            line,
        }
    }

    /// Only `./x` and `../x` style specifiers are ever followed.
    pub fn is_relative(&self) -> bool {
        is_relative_specifier(&self.path_specifier)
    }
}

/// True for specifiers starting with `.`, such as `./x` and `../x`. Package
/// names and absolute paths are never resolved.
pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier.starts_with('.')
}

/// An externally reachable handler, e.g. an Express route registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPoint {
    pub file_path: String,
    pub method: String,
    pub pattern: String,
    pub handler_start_line: usize,
    pub handler_end_line: usize,
    pub handler_source: String,
    #[serde(default)]
    pub middleware: Vec<String>,
}

impl EntryPoint {
    pub fn contains_line(&self, line: usize) -> bool {
        self.handler_start_line <= line && line <= self.handler_end_line
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.method.to_uppercase(), self.pattern)
    }
}

/// Everything the extractor found in one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFacts {
    pub path: String,
    #[serde(default)]
    pub definitions: Vec<FunctionDefinition>,
    #[serde(default)]
    pub calls: Vec<CallSite>,
    #[serde(default)]
    pub imports: Vec<ImportBinding>,
    #[serde(default)]
    pub entry_points: Vec<EntryPoint>,
}

impl FileFacts {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_definition(mut self, definition: FunctionDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    pub fn with_call(mut self, call: CallSite) -> Self {
        self.calls.push(call);
        self
    }

    pub fn with_import(mut self, import: ImportBinding) -> Self {
        self.imports.push(import);
        self
    }

    pub fn with_entry_point(mut self, entry_point: EntryPoint) -> Self {
        self.entry_points.push(entry_point);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_counts_lines_after_the_first() {
        let definition = FunctionDefinition::new("f", "/a.js", 3, 7, "");
        assert_eq!(definition.span(), 4);
    }

    #[test]
    fn inverted_range_has_zero_span() {
        let definition = FunctionDefinition::new("f", "/a.js", 9, 2, "");
        assert_eq!(definition.span(), 0);
        assert!(!definition.contains_line(5));
    }

    #[test]
    fn only_dot_prefixed_specifiers_are_relative() {
        let import = |spec: &str| ImportBinding::new("x", spec, "/a.js", 1);
        assert!(import("./db").is_relative());
        assert!(import("../lib/store").is_relative());
        assert!(!import("express").is_relative());
        assert!(!import("/abs/path").is_relative());
    }
}
