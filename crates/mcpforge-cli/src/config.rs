//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `MCPFORGE__OUTPUT__NO_COLOR=true`
//! 3. Config file: `--config <FILE>` (must exist) or [`AppConfig::config_path`]
//!    (optional)
//! 4. Built-in defaults (always present)
//!
//! ```toml
//! [output]
//! no_color = true
//! format = "plain"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::cli::global::OutputFormat;

const ENV_PREFIX: &str = "MCPFORGE";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path passed via `--config`; a missing explicit
    /// file is an error, a missing default file is not.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => file_source(path).required(true),
            None => file_source(&Self::config_path()).required(false),
        };
        Self::build(file, Environment::with_prefix(ENV_PREFIX))
    }

    fn build(
        file: File<config::FileSourceFile, FileFormat>,
        env: Environment,
    ) -> anyhow::Result<Self> {
        let env = env
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true);

        Config::builder()
            .set_default("output.no_color", false)?
            .set_default("output.format", "auto")?
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.mcpforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "mcpforge", "mcpforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".mcpforge.toml"))
    }
}

fn file_source(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}
