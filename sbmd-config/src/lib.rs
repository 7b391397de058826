//! Shared configuration loader for the sbmd toolchain.
//!
//! `defaults/sbmd.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`SbmdConfig`].
//!
//! Nothing here changes how text is converted; the knobs only shape the
//! shell around the converters.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/sbmd.default.toml");

/// File name picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "sbmd.toml";

/// Top-level configuration consumed by sbmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SbmdConfig {
    pub status: StatusConfig,
    pub clipboard: ClipboardConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Controls the human-readable status line.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusConfig {
    pub quiet: bool,
    pub emoji: bool,
}

/// How the clipboard commands leave the system clipboard behind.
#[derive(Debug, Clone, Deserialize)]
pub struct ClipboardConfig {
    pub hold: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub trailing_newline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
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
    pub fn build(self) -> Result<SbmdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SbmdConfig, ConfigError> {
    Loader::new().build()
}
