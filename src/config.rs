//! Configuration loader.
//!
//! `defaults/rangeid.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. Callers layer a
//! user file, the environment and explicit overrides on top via [`Loader`]
//! before deserializing into [`RangeIdConfig`].

use crate::formats::Packing;
use crate::logging::LogLevel;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/rangeid.default.toml");

/// Prefix of environment overrides, e.g. `RANGEID__OUTPUT__FORMAT`
pub const ENV_PREFIX: &str = "RANGEID";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RangeIdConfig {
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// How results are rendered and exported.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub packing: Packing,
    /// Registry name of the exporter
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: LogLevel,
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

    /// Layer `RANGEID__SECTION__KEY` environment variables.
    pub fn with_env(mut self) -> Self {
        self.builder = self
            .builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RangeIdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RangeIdConfig, ConfigError> {
    Loader::new().build()
}
