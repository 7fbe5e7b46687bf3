//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `pygen.toml` files
//! and merging with command-line arguments.

use crate::error::{CliResult, ConfigError};
use pygen_ir::{emit, EmitConfig, IndentStyle};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "pygen.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,

    /// Rendering options.
    pub render: RenderConfig,

    /// Consistency check options.
    pub check: CheckConfig,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for rendered files.
    pub dir: PathBuf,

    /// Whether `fmt` writes indented JSON.
    pub pretty: bool,
}

/// Rendering configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Emitter id (`stub` or `markdown`).
    pub format: String,

    /// Whether to render documentation strings.
    pub include_docs: bool,

    /// Indentation (`spaces2`, `spaces4`, `tabs`).
    pub indent: String,
}

/// Consistency check configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Treat consistency findings as failures.
    pub deny_warnings: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./generated"),
            pretty: true,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: "stub".to_string(),
            include_docs: true,
            indent: "spaces4".to_string(),
        }
    }
}

impl Config {
    /// Check values that TOML alone cannot validate.
    pub fn validate(&self) -> CliResult<()> {
        if emit::emitter_for(&self.render.format).is_none() {
            return Err(ConfigError::invalid_value(
                "render.format",
                format!(
                    "unknown emitter '{}' (expected one of: {})",
                    self.render.format,
                    emit::EMITTER_IDS.join(", ")
                ),
            )
            .into());
        }
        if IndentStyle::from_name(&self.render.indent).is_none() {
            return Err(ConfigError::invalid_value(
                "render.indent",
                format!(
                    "unknown indent '{}' (expected spaces2, spaces4 or tabs)",
                    self.render.indent
                ),
            )
            .into());
        }
        Ok(())
    }

    /// Emitter options derived from the render section.
    pub fn emit_config(&self) -> CliResult<EmitConfig> {
        let indent = IndentStyle::from_name(&self.render.indent).ok_or_else(|| {
            ConfigError::invalid_value(
                "render.indent",
                format!("unknown indent '{}'", self.render.indent),
            )
        })?;
        Ok(EmitConfig::new()
            .with_include_docs(self.render.include_docs)
            .with_indent(indent))
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// An explicitly given path must exist. Without a path the default
    /// location is tried, falling back to defaults when it is absent.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::not_found(path.to_path_buf()).into());
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(CONFIG_FILENAME),
        };

        if !config_path.exists() {
            tracing::debug!("no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path.clone(), e.to_string()))?;
        config.validate()?;

        tracing::debug!(path = %config_path.display(), "loaded configuration");
        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if let Some(pretty) = args.pretty {
            config.output.pretty = pretty;
        }

        if let Some(ref format) = args.format {
            config.render.format = format.clone();
        }

        if let Some(include_docs) = args.include_docs {
            config.render.include_docs = include_docs;
        }

        if let Some(deny_warnings) = args.deny_warnings {
            config.check.deny_warnings = deny_warnings;
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# pygen configuration file

[output]
# Output directory for rendered files
dir = "./generated"

# Whether `pygen fmt` writes indented JSON
pretty = true

[render]
# Emitter used by `pygen render` (stub, markdown)
format = "stub"

# Whether to render documentation strings
include_docs = true

# Indentation of generated code (spaces2, spaces4, tabs)
indent = "spaces4"

[check]
# Fail `pygen check` when consistency issues are found
deny_warnings = false
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Output directory override.
    pub output: Option<PathBuf>,

    /// Pretty JSON override.
    pub pretty: Option<bool>,

    /// Emitter override.
    pub format: Option<String>,

    /// Include docs override.
    pub include_docs: Option<bool>,

    /// Deny warnings override.
    pub deny_warnings: Option<bool>,
}
