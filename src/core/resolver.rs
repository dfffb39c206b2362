use std::path::{Path, PathBuf};

use super::graph::NodeId;
use super::symbols::SymbolTable;
use crate::config::GraphConfig;
use crate::facts::{is_relative_specifier, CallSite, FactStore, FunctionDefinition};

/// Maps call sites to registered definitions using only lexical facts.
///
/// Resolution order for a call `name()` in file `F`:
/// 1. a definition `name` in `F` itself
/// 2. an import in `F` binding `name` to a relative module that defines `name`
/// 3. for `recv.name()`, an import in `F` binding `recv` to a relative module
///    that defines `name`
///
/// Anything else (built-ins, package imports, dynamic targets) is unresolved.
#[derive(Debug, Clone, Copy)]
pub struct FunctionResolver<'a> {
    facts: &'a FactStore,
    symbols: &'a SymbolTable,
    config: &'a GraphConfig,
}

impl<'a> FunctionResolver<'a> {
    pub fn new(facts: &'a FactStore, symbols: &'a SymbolTable, config: &'a GraphConfig) -> Self {
        Self {
            facts,
            symbols,
            config,
        }
    }

    /// Innermost definition in `file_path` whose inclusive range contains `line`.
    ///
    /// Smallest span wins so that nested callbacks are attributed instead of
    /// the function wrapping them. Equal spans keep the earliest definition.
    pub fn enclosing_definition(
        &self,
        file_path: &str,
        line: usize,
    ) -> Option<&'a FunctionDefinition> {
        let mut best: Option<&FunctionDefinition> = None;
        for definition in self.facts.definitions(file_path) {
            if !definition.contains_line(line) {
                continue;
            }
            if best.map_or(true, |current| definition.span() < current.span()) {
                best = Some(definition);
            }
        }
        best
    }

    pub fn enclosing_function(&self, file_path: &str, line: usize) -> Option<&'a str> {
        self.enclosing_definition(file_path, line)
            .map(|definition| definition.name.as_str())
    }

    /// Caller node for a call site, if it sits inside a registered function.
    pub fn resolve_caller(&self, call: &CallSite) -> Option<NodeId> {
        let name = self.enclosing_function(&call.file_path, call.line)?;
        let id = NodeId::new(&call.file_path, name);
        self.symbols.contains(&id).then_some(id)
    }

    /// Callee node for a call site. Graph edges and route contexts both go
    /// through here so they can never disagree.
    pub fn resolve_callee(&self, call: &CallSite) -> Option<NodeId> {
        let local = NodeId::new(&call.file_path, &call.callee_name);
        if self.symbols.contains(&local) {
            return Some(local);
        }

        let by_name = self.resolve_import(&call.file_path, &call.callee_name, &call.callee_name);
        if by_name.is_some() {
            return by_name;
        }

        let receiver = call.receiver_name.as_deref()?;
        self.resolve_import(&call.file_path, receiver, &call.callee_name)
    }

    /// Follow the binding of `bound_name` in `file_path` and look for
    /// `callee_name` in the module it points to.
    pub fn resolve_import(
        &self,
        file_path: &str,
        bound_name: &str,
        callee_name: &str,
    ) -> Option<NodeId> {
        self.facts
            .imports(file_path)
            .iter()
            .filter(|import| import.bound_name == bound_name && import.is_relative())
            .find_map(|import| {
                let target_file = self.resolve_import_path(file_path, &import.path_specifier)?;
                let candidate = NodeId::new(target_file, callee_name);
                self.symbols.contains(&candidate).then_some(candidate)
            })
    }

    /// Resolve a relative specifier to a known file key.
    ///
    /// Candidates in order: the literal path, the path with each configured extension
    /// appended, then `<path>/<index_stem><ext>` for each extension.
    pub fn resolve_import_path(&self, importing_file: &str, specifier: &str) -> Option<&'a str> {
        if !is_relative_specifier(specifier) {
            return None;
        }

        let base_dir = Path::new(importing_file)
            .parent()
            .unwrap_or_else(|| Path::new(""));
        let candidate = base_dir.join(specifier);

        self.candidate_paths(&candidate)
            .into_iter()
            .find_map(|path| self.facts.lookup_file(&path))
    }

    fn candidate_paths(&self, candidate: &Path) -> Vec<PathBuf> {
        let extensions: Vec<String> = self.config.dotted_extensions().collect();
        let mut paths = Vec::with_capacity(1 + extensions.len() * 2);

        paths.push(candidate.to_path_buf());
        for ext in &extensions {
            let mut appended = candidate.as_os_str().to_os_string();
            appended.push(ext);
            paths.push(PathBuf::from(appended));
        }
        for ext in &extensions {
            paths.push(candidate.join(format!("{}{}", self.config.index_stem, ext)));
        }
        paths
    }
}
