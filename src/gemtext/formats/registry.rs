//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use super::{
    DebugFormat, DocumentView, Format, FormatError, GemtextFormat, HtmlFormat, JsonFormat,
    YamlFormat,
};
use crate::gemtext::config::GmiConfig;
use std::collections::HashMap;
use tracing::debug;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let mut registry = FormatRegistry::new();
/// registry.register(MyFormat);
///
/// let output = registry.serialize(&view, "my-format")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Render a document using the specified format
    pub fn serialize(&self, doc: &DocumentView<'_>, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        debug!(format = %format, lines = doc.lines.len(), "rendering document");
        fmt.serialize(doc)
    }

    /// Create a registry with the built-in formats, configured from `config`
    pub fn with_defaults(config: &GmiConfig) -> Self {
        let mut registry = Self::new();

        registry.register(DebugFormat::new(config.debug.clone()));
        registry.register(HtmlFormat::new(config.html.clone()));
        registry.register(GemtextFormat);
        registry.register(JsonFormat);
        registry.register(YamlFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
