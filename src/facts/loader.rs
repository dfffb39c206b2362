use log::warn;
use rayon::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::FileFacts;
use crate::error::{Result, SliceError};

/// A fact file holds either one file's facts or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum FactDocument {
    Single(FileFacts),
    Many(Vec<FileFacts>),
}

pub fn load_fact_file(path: &Path) -> Result<Vec<FileFacts>> {
    let data = fs::read_to_string(path)?;
    let document: FactDocument =
        serde_json::from_str(&data).map_err(|source| SliceError::JsonError {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(match document {
        FactDocument::Single(facts) => vec![facts],
        FactDocument::Many(facts) => facts,
    })
}

/// Decode fact files in parallel, keeping the input order.
///
/// A file that cannot be read or decoded contributes nothing, the same as a
/// source file the extractor found empty.
pub fn load_fact_files(paths: &[PathBuf]) -> Vec<FileFacts> {
    let decoded: Vec<Vec<FileFacts>> = paths
        .par_iter()
        .map(|path| {
            load_fact_file(path).unwrap_or_else(|err| {
                warn!("Skipping fact file {}: {}", path.display(), err);
                Vec::new()
            })
        })
        .collect();

    decoded.into_iter().flatten().collect()
}
