//! JscaBuilder - output destination and writing
//!
//! Generation itself only produces a [`JscaDocument`](crate::JscaDocument);
//! this module decides where the serialized document goes:
//!
//! 1. stdout, when explicitly requested
//! 2. `<output_dir>/api.jsca`, when an output directory is given
//! 3. `<dist_dir>/apidoc/api.jsca`, when the dist directory exists
//! 4. stdout otherwise, with a warning

use crate::diagnostics::{JscaError, JscaResult};
use crate::generator::{JscaConfig, JscaGenerator};
use apidoc_model::TypeRegistry;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name of the written document
pub const OUTPUT_FILE: &str = "api.jsca";

/// Directory created under the dist directory
pub const DIST_SUBDIR: &str = "apidoc";

/// Where the document is written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Standard output
    #[default]
    Stdout,
    /// `api.jsca` inside this directory
    Dir(PathBuf),
}

/// Result of a build
#[derive(Debug)]
pub struct BuildOutput {
    /// Written file, `None` when written to stdout
    pub path: Option<PathBuf>,
    /// Number of published types
    pub type_count: usize,
    /// Size of the serialized document
    pub bytes: usize,
}

/// Builder for generating and writing the JSCA document
///
/// # Example
///
/// ```no_run
/// use apidoc_jsca::JscaBuilder;
/// use apidoc_model::TypeRegistry;
///
/// let registry = TypeRegistry::new();
/// JscaBuilder::new()
///     .output_dir("build/docs")
///     .exclude_type("Titanium.Internal")
///     .build(&registry)
///     .expect("Failed to write api.jsca");
/// ```
#[derive(Debug, Clone, Default)]
pub struct JscaBuilder {
    /// Generation settings
    pub config: JscaConfig,
    /// Explicit output directory
    pub output_dir: Option<PathBuf>,
    /// Distribution directory used when no output directory is given
    pub dist_dir: Option<PathBuf>,
    /// Force writing to stdout
    pub stdout: bool,
}

impl JscaBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the generation settings
    pub fn config(mut self, config: JscaConfig) -> Self {
        self.config = config;
        self
    }

    /// Exclude one more type name
    pub fn exclude_type(mut self, name: impl Into<String>) -> Self {
        self.config = self.config.exclude_type(name);
        self
    }

    /// Set the output directory
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Set the dist directory
    pub fn dist_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dist_dir = Some(path.into());
        self
    }

    /// Force writing to stdout
    pub fn stdout(mut self, enable: bool) -> Self {
        self.stdout = enable;
        self
    }

    /// Decide where the document goes
    pub fn target(&self) -> OutputTarget {
        if self.stdout {
            return OutputTarget::Stdout;
        }
        if let Some(dir) = &self.output_dir {
            return OutputTarget::Dir(dir.clone());
        }
        if let Some(dist) = self.dist_dir.as_deref().filter(|d| d.is_dir()) {
            return OutputTarget::Dir(dist.join(DIST_SUBDIR));
        }
        warn!("No output directory and no dist directory found, writing JSCA to stdout");
        OutputTarget::Stdout
    }

    /// Generate the document and write it to the resolved target
    pub fn build(&self, registry: &TypeRegistry) -> JscaResult<BuildOutput> {
        let stdout = std::io::stdout();
        self.build_with_stdout(registry, &mut stdout.lock())
    }

    /// Like [`build`](Self::build), with a custom writer standing in for stdout
    pub fn build_with_stdout<W: Write>(
        &self,
        registry: &TypeRegistry,
        stdout: &mut W,
    ) -> JscaResult<BuildOutput> {
        let generator = JscaGenerator::with_config(registry, self.config.clone());
        let document = generator.generate();
        let json = generator.serialize(&document)?;

        let path = match self.target() {
            OutputTarget::Stdout => {
                writeln!(stdout, "{}", json)?;
                None
            }
            OutputTarget::Dir(dir) => Some(write_document(&dir, &json)?),
        };

        Ok(BuildOutput {
            path,
            type_count: document.types.len(),
            bytes: json.len(),
        })
    }
}

fn write_document(dir: &Path, json: &str) -> JscaResult<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| JscaError::write(dir, e))?;
    let path = dir.join(OUTPUT_FILE);
    std::fs::write(&path, json).map_err(|e| JscaError::write(&path, e))?;
    info!("Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{mock_module, mock_registry};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_target_precedence() {
        let temp = TempDir::new().unwrap();
        let dist = temp.path().join("dist");
        std::fs::create_dir(&dist).unwrap();

        let builder = JscaBuilder::new()
            .output_dir(temp.path().join("out"))
            .dist_dir(&dist);
        assert_eq!(builder.target(), OutputTarget::Dir(temp.path().join("out")));
        assert_eq!(builder.clone().stdout(true).target(), OutputTarget::Stdout);

        let builder = JscaBuilder::new().dist_dir(&dist);
        assert_eq!(builder.target(), OutputTarget::Dir(dist.join("apidoc")));

        let builder = JscaBuilder::new().dist_dir(temp.path().join("missing"));
        assert_eq!(builder.target(), OutputTarget::Stdout);
    }

    #[test]
    fn test_build_writes_file() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("nested").join("out");
        let registry = mock_registry(vec![mock_module("Titanium.App")]);

        let output = JscaBuilder::new().output_dir(&out).build(&registry).unwrap();
        assert_eq!(output.path, Some(out.join("api.jsca")));
        assert_eq!(output.type_count, 1);

        let written = std::fs::read_to_string(out.join("api.jsca")).unwrap();
        assert_eq!(written.len(), output.bytes);
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["types"][0]["name"], "Titanium.App");
    }

    #[test]
    fn test_build_to_stdout() {
        let registry = mock_registry(vec![]);
        let mut buf = Vec::new();
        let output = JscaBuilder::new()
            .stdout(true)
            .build_with_stdout(&registry, &mut buf)
            .unwrap();
        assert_eq!(output.path, None);
        assert_eq!(output.type_count, 0);

        let printed = String::from_utf8(buf).unwrap();
        assert!(printed.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&printed).unwrap();
        assert_eq!(value["aliases"][0]["name"], "Ti");
    }

    #[test]
    fn test_unwritable_output_dir() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let registry = mock_registry(vec![]);
        let err = JscaBuilder::new()
            .output_dir(blocker.join("out"))
            .build(&registry)
            .unwrap_err();
        assert!(matches!(err, JscaError::Write { .. }));
    }
}
