use log::warn;
use std::collections::{BTreeMap, HashMap};
use std::path::{Component, Path, PathBuf};

use super::{CallSite, EntryPoint, FileFacts, FunctionDefinition, ImportBinding};

#[derive(Debug, Clone, Default)]
struct FileEntry {
    definitions: Vec<FunctionDefinition>,
    calls: Vec<CallSite>,
    imports: Vec<ImportBinding>,
    entry_points: Vec<EntryPoint>,
}

/// Per-file fact lists for one build, regrouped by each fact's own file path.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    files: BTreeMap<String, FileEntry>,
    /// Lexically normalized path -> key in `files`, used for import probing
    known_paths: HashMap<PathBuf, String>,
}

impl FactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_files<I>(files: I) -> Self
    where
        I: IntoIterator<Item = FileFacts>,
    {
        let mut store = Self::new();
        for file in files {
            store.insert(file);
        }
        store
    }

    pub fn insert(&mut self, facts: FileFacts) {
        let FileFacts {
            path,
            definitions,
            calls,
            imports,
            entry_points,
        } = facts;

        self.entry_mut(&path);

        for definition in definitions {
            if definition.start_line > definition.end_line {
                warn!(
                    "Dropping definition {} in {}: start line {} is after end line {}",
                    definition.name,
                    definition.file_path,
                    definition.start_line,
                    definition.end_line
                );
                continue;
            }
            let file = definition.file_path.clone();
            self.entry_mut(&file).definitions.push(definition);
        }
        for call in calls {
            let file = call.file_path.clone();
            self.entry_mut(&file).calls.push(call);
        }
        for import in imports {
            let file = import.file_path.clone();
            self.entry_mut(&file).imports.push(import);
        }
        for entry_point in entry_points {
            let file = entry_point.file_path.clone();
            self.entry_mut(&file).entry_points.push(entry_point);
        }
    }

    fn entry_mut(&mut self, file: &str) -> &mut FileEntry {
        if !self.files.contains_key(file) {
            self.known_paths
                .insert(normalize_path(Path::new(file)), file.to_string());
        }
        self.files.entry(file.to_string()).or_default()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// File keys in sorted order.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn definitions(&self, file: &str) -> &[FunctionDefinition] {
        self.files
            .get(file)
            .map(|entry| entry.definitions.as_slice())
            .unwrap_or(&[])
    }

    pub fn calls(&self, file: &str) -> &[CallSite] {
        self.files
            .get(file)
            .map(|entry| entry.calls.as_slice())
            .unwrap_or(&[])
    }

    pub fn imports(&self, file: &str) -> &[ImportBinding] {
        self.files
            .get(file)
            .map(|entry| entry.imports.as_slice())
            .unwrap_or(&[])
    }

    pub fn entry_points(&self) -> impl Iterator<Item = &EntryPoint> {
        self.files
            .values()
            .flat_map(|entry| entry.entry_points.iter())
    }

    /// Map a path on disk to the file key it was registered under, if any.
    pub fn lookup_file(&self, path: &Path) -> Option<&str> {
        self.known_paths
            .get(&normalize_path(path))
            .map(String::as_str)
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    normalized.pop();
                } else if !matches!(
                    normalized.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_))
                ) {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_dot_segments() {
        assert_eq!(
            normalize_path(Path::new("/app/routes/../lib/./db.js")),
            PathBuf::from("/app/lib/db.js")
        );
        assert_eq!(
            normalize_path(Path::new("src/./a/../b.ts")),
            PathBuf::from("src/b.ts")
        );
    }

    #[test]
    fn normalize_keeps_leading_parent_on_relative_paths() {
        assert_eq!(
            normalize_path(Path::new("../shared/util.js")),
            PathBuf::from("../shared/util.js")
        );
        assert_eq!(normalize_path(Path::new("/../etc")), PathBuf::from("/etc"));
    }

    #[test]
    fn facts_are_grouped_by_their_own_file() {
        let bundle = FileFacts::new("/app/a.js")
            .with_definition(FunctionDefinition::new("f", "/app/a.js", 1, 3, "function f() {}"))
            .with_definition(FunctionDefinition::new("g", "/app/b.js", 1, 2, "function g() {}"));
        let store = FactStore::from_files(vec![bundle]);

        assert_eq!(store.file_count(), 2);
        assert_eq!(store.definitions("/app/a.js").len(), 1);
        assert_eq!(store.definitions("/app/b.js")[0].name, "g");
        assert_eq!(store.lookup_file(Path::new("/app/x/../b.js")), Some("/app/b.js"));
    }

    #[test]
    fn inverted_ranges_are_dropped() {
        let bundle = FileFacts::new("a.js")
            .with_definition(FunctionDefinition::new("bad", "a.js", 9, 2, ""));
        let store = FactStore::from_files(vec![bundle]);
        assert!(store.definitions("a.js").is_empty());
    }
}
