//! Shared configuration loader for the blueprint toolchain.
//!
//! `defaults/blueprint.default.toml` is embedded into every binary so that the
//! documented defaults and runtime behavior stay in sync. Applications layer
//! user files, `BLUEPRINT__SECTION__KEY` environment variables and CLI
//! overrides on top via [`Loader`] before deserializing into
//! [`BlueprintConfig`].

use blueprint_babel::Dialect;
use blueprint_import::{ClientOptions, Thresholds};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const DEFAULT_TOML: &str = include_str!("../defaults/blueprint.default.toml");

/// Prefix of environment overrides, e.g. `BLUEPRINT__FIGMA__TOKEN`.
pub const ENV_PREFIX: &str = "BLUEPRINT";

/// Top-level configuration consumed by blueprint applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BlueprintConfig {
    pub figma: FigmaConfig,
    pub classifier: Thresholds,
    pub export: ExportConfig,
}

/// Design API access.
#[derive(Debug, Clone, Deserialize)]
pub struct FigmaConfig {
    pub base_url: String,
    pub token: String,
    pub timeout_secs: u64,
    pub depth: u32,
}

impl FigmaConfig {
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.base_url.clone(),
            token: self.token.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            depth: self.depth,
        }
    }
}

/// Page-builder export defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub title: String,
    pub dialect: Dialect,
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

    /// Layer `BLUEPRINT__*` variables from the process environment.
    pub fn with_env(self) -> Self {
        self.with_environment(environment())
    }

    fn with_environment(mut self, source: Environment) -> Self {
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
    pub fn build(self) -> Result<BlueprintConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BlueprintConfig, ConfigError> {
    Loader::new().build()
}
