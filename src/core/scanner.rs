use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, SliceError};

const FACT_FILE_EXTENSION: &str = "json";

/// Finds fact files written by the extractor, one per source file.
pub struct FileScanner {
    skip_dirs: Vec<String>,
}

impl FileScanner {
    pub fn new(skip_dirs: &[String]) -> Self {
        Self {
            skip_dirs: skip_dirs.to_vec(),
        }
    }

    /// Every `*.json` file under `root_path`, sorted, outside skipped directories.
    pub fn scan_directory(&self, root_path: &Path) -> Result<Vec<PathBuf>> {
        if !root_path.is_dir() {
            return Err(SliceError::InvalidPath(root_path.display().to_string()));
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(root_path)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_skipped(entry));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_fact_file = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == FACT_FILE_EXTENSION);
            if is_fact_file {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    fn is_skipped(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.skip_dirs.iter().any(|skip| skip == name))
    }
}
