//! JSCA generator - document assembly
//!
//! [`JscaGenerator`] walks the type registry in order, maps every publishable
//! type and wraps the results in the JSCA envelope. All per-run state lives
//! in a [`JscaContext`] passed explicitly to the mappers; the registry is
//! never mutated.

use crate::api_type::map_type;
use crate::diagnostics::{JscaError, JscaResult};
use crate::markdown::MarkdownRenderer;
use crate::node::{JscaAlias, JscaDocument, JscaExample};
use apidoc_model::{Deprecation, Example, TypeRegistry};
use indexmap::IndexSet;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

/// Types that are documented but never published
pub const DEFAULT_EXCLUDED_TYPES: &[&str] =
    &["Titanium.Proxy", "Titanium.Module", "Titanium.Event"];

/// Indent of the serialized document
pub const DEFAULT_INDENT: &str = "    ";

/// Configuration for JSCA generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JscaConfig {
    /// Type names that never appear in the output
    pub excluded_types: IndexSet<String>,
    /// Namespace aliases emitted in the envelope
    pub aliases: Vec<JscaAlias>,
    /// Indent used when serializing
    pub indent: String,
}

impl Default for JscaConfig {
    fn default() -> Self {
        Self {
            excluded_types: DEFAULT_EXCLUDED_TYPES.iter().map(|s| s.to_string()).collect(),
            aliases: vec![JscaAlias::new("Ti", "Titanium")],
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

impl JscaConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude one more type name
    pub fn exclude_type(mut self, name: impl Into<String>) -> Self {
        self.excluded_types.insert(name.into());
        self
    }

    /// Set the serialization indent
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Check whether a type name is excluded
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_types.contains(name)
    }

    /// Check the configuration before use
    pub fn validate(&self) -> JscaResult<()> {
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(JscaError::config(format!(
                "indent must only contain spaces or tabs, got {:?}",
                self.indent
            )));
        }
        Ok(())
    }
}

/// Read-only state shared by the mappers for one run
pub struct JscaContext<'a> {
    registry: &'a TypeRegistry,
    markdown: MarkdownRenderer<'a>,
    excluded_types: IndexSet<String>,
}

impl<'a> JscaContext<'a> {
    /// Create a context with the default exclusions
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self::with_config(registry, &JscaConfig::default())
    }

    /// Create a context for the given configuration
    pub fn with_config(registry: &'a TypeRegistry, config: &JscaConfig) -> Self {
        Self {
            registry,
            markdown: MarkdownRenderer::new(registry),
            excluded_types: config.excluded_types.clone(),
        }
    }

    /// The type registry
    pub fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    /// Check whether a type name is excluded from the output
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_types.contains(name)
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        self.markdown.render(markdown)
    }

    /// Render a summary with its deprecation notice, `""` when absent
    pub fn description(&self, summary: Option<&str>, deprecation: Option<&Deprecation>) -> String {
        self.markdown.description(summary, deprecation)
    }

    /// Map example blocks
    pub fn examples(&self, examples: &[Example]) -> Vec<JscaExample> {
        examples
            .iter()
            .map(|example| JscaExample {
                name: example.title.clone(),
                code: self.render(&example.example),
            })
            .collect()
    }
}

/// Assembles the JSCA document for a registry
pub struct JscaGenerator<'a> {
    registry: &'a TypeRegistry,
    config: JscaConfig,
}

impl<'a> JscaGenerator<'a> {
    /// Create a generator with the default configuration
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self::with_config(registry, JscaConfig::default())
    }

    /// Create a generator with a custom configuration
    pub fn with_config(registry: &'a TypeRegistry, config: JscaConfig) -> Self {
        Self { registry, config }
    }

    /// Get the configuration
    pub fn config(&self) -> &JscaConfig {
        &self.config
    }

    /// Map every publishable registry entry, in registry order
    pub fn generate(&self) -> JscaDocument {
        info!("Generating JSCA");
        let ctx = JscaContext::with_config(self.registry, &self.config);
        let types = self
            .registry
            .iter()
            .filter_map(|object| map_type(&ctx, object))
            .collect();

        JscaDocument {
            aliases: self.config.aliases.clone(),
            types,
        }
    }

    /// Generate and serialize the document with the configured indent
    pub fn to_json_string(&self) -> JscaResult<String> {
        self.serialize(&self.generate())
    }

    /// Serialize a generated document with the configured indent
    pub fn serialize(&self, document: &JscaDocument) -> JscaResult<String> {
        self.config.validate()?;

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.config.indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        document.serialize(&mut serializer)?;

        String::from_utf8(buf).map_err(|e| JscaError::other(e.to_string()))
    }
}
