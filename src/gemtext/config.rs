//! Shared configuration loader for gmi.
//!
//! `defaults/gmi.default.toml` is embedded into every binary so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults
//! via [`Loader`] before deserializing into [`GmiConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/gmi.default.toml");

/// Top-level configuration consumed by the renderers and the command line.
#[derive(Debug, Clone, Deserialize)]
pub struct GmiConfig {
    pub html: HtmlConfig,
    pub debug: DebugConfig,
    pub output: OutputConfig,
}

/// Knobs for the HTML renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub standalone: bool,
    pub include_toc: bool,
    pub heading_anchors: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DebugConfig {
    pub show_toc: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub default_format: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        debug!(path = %path.as_ref().display(), "layering configuration file");
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        debug!(path = %path.as_ref().display(), "layering optional configuration file");
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GmiConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GmiConfig, ConfigError> {
    Loader::new().build()
}
