//! Shared configuration loader for the mythwright tools.
//!
//! `defaults/mythwright.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`MythwrightConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mythwright_compat::{Converter, ExtensionRegistry, ImportOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mythwright.default.toml");

/// Top-level configuration consumed by mythwright applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MythwrightConfig {
    pub render: RenderConfig,
    pub extract: ExtractConfig,
    pub import: ImportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub icons: bool,
    pub default_target: RenderTarget,
}

impl RenderConfig {
    /// Extension registry matching these settings.
    pub fn registry(&self) -> ExtensionRegistry {
        if self.icons {
            ExtensionRegistry::with_icons()
        } else {
            ExtensionRegistry::with_baseline()
        }
    }

    pub fn converter(&self) -> Converter {
        Converter::new(self.registry())
    }
}

/// Output flavour of a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RenderTarget {
    #[serde(rename = "html")]
    Html,
    #[serde(rename = "text")]
    Text,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    pub max_input_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    pub strip_definitions: bool,
}

impl From<&ImportConfig> for ImportOptions {
    fn from(config: &ImportConfig) -> Self {
        ImportOptions {
            strip_definitions: config.strip_definitions,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "warn" or "mythwright_compat=debug"
    pub level: String,
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
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
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
    pub fn build(self) -> Result<MythwrightConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MythwrightConfig, ConfigError> {
    Loader::new().build()
}
