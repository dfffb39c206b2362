use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

pub const DEFAULT_DEPTH: usize = 5;

/// Resolution and traversal settings for one build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Extensions tried, in order, when an import specifier omits one
    pub source_extensions: Vec<String>,
    /// File stem tried inside a directory import
    pub index_stem: String,
    pub default_depth: usize,
    /// Directory names skipped when scanning for fact files
    pub skip_dirs: Vec<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            source_extensions: [".js", ".ts", ".jsx", ".tsx"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            index_stem: "index".to_string(),
            default_depth: DEFAULT_DEPTH,
            skip_dirs: ["node_modules", ".git", "dist", "build", ".next"]
                .iter()
                .map(|dir| dir.to_string())
                .collect(),
        }
    }
}

impl GraphConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn with_default_depth(mut self, depth: usize) -> Self {
        self.default_depth = depth;
        self
    }

    /// Extensions normalized to carry a leading dot.
    pub(crate) fn dotted_extensions(&self) -> impl Iterator<Item = String> + '_ {
        self.source_extensions.iter().map(|ext| {
            if ext.starts_with('.') {
                ext.clone()
            } else {
                format!(".{ext}")
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = GraphConfig::from_toml_str("default_depth = 2\n").unwrap();
        assert_eq!(config.default_depth, 2);
        assert_eq!(config.index_stem, "index");
        assert_eq!(config.source_extensions.len(), 4);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(GraphConfig::from_toml_str("depth = 2\n").is_err());
    }

    #[test]
    fn extensions_gain_a_leading_dot() {
        let config =
            GraphConfig::from_toml_str("source_extensions = [\"mjs\", \".cjs\"]\n").unwrap();
        let exts: Vec<String> = config.dotted_extensions().collect();
        assert_eq!(exts, vec![".mjs", ".cjs"]);
    }
}
