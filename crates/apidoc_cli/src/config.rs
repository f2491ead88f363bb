//! Configuration file parsing from apidoc.toml
//!
//! ```toml
//! [output]
//! dir = "build/docs"
//! stdout = false
//! dist = "dist"
//!
//! [jsca]
//! exclude_types = ["Titanium.Internal"]
//! indent = "  "
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE: &str = "apidoc.toml";

/// Full configuration file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ApidocConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub jsca: JscaSection,
}

/// Output destination settings
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct OutputConfig {
    /// Directory `api.jsca` is written to
    pub dir: Option<PathBuf>,
    /// Write to stdout instead of a file
    pub stdout: Option<bool>,
    /// Distribution directory used when no `dir` is set
    pub dist: Option<PathBuf>,
}

/// JSCA generator settings
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct JscaSection {
    /// Extra type names left out of the document
    #[serde(default)]
    pub exclude_types: Vec<String>,
    /// JSON indent
    pub indent: Option<String>,
}

impl ApidocConfig {
    /// Load `apidoc.toml` from `dir` if present, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(config.resolve_paths(base))
    }

    fn resolve_paths(mut self, base: &Path) -> Self {
        self.output.dir = self.output.dir.map(|dir| base.join(dir));
        self.output.dist = self.output.dist.map(|dist| base.join(dist));
        self
    }
}
