//! Registry loading from JSON input files

use anyhow::{bail, Context, Result};
use apidoc_model::TypeRegistry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Expand inputs into the list of JSON files to read
///
/// Files are kept in the given order. Directories are walked recursively
/// and contribute their `*.json` files sorted by path.
pub fn collect_input_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(json_files_in(input)?);
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            bail!("Input not found: {}", input.display());
        }
    }
    Ok(files)
}

fn json_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Read every input into a single registry
///
/// Fails on the first unreadable or malformed file, and when two files
/// document the same type.
pub fn load_registry(inputs: &[PathBuf]) -> Result<TypeRegistry> {
    let mut registry = TypeRegistry::new();
    for path in collect_input_files(inputs)? {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let part = TypeRegistry::from_json_str(&content)
            .with_context(|| format!("Failed to load API records from {}", path.display()))?;
        debug!("Loaded {} types from {}", part.len(), path.display());
        registry
            .extend(part)
            .with_context(|| format!("Failed to merge {}", path.display()))?;
    }
    Ok(registry)
}
