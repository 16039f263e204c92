//! Layered settings: defaults, optional TOML file, `CALCULATOR_*` env vars

use std::path::Path;

use calculator_core::application::ShellConfig;
use calculator_core::AppError;
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is absent
const DEFAULT_CONFIG_NAME: &str = "calculator";
const ENV_PREFIX: &str = "CALCULATOR";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub shell: ShellConfig,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `pretty` or `json`
    pub format: String,
    /// EnvFilter directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            format: "pretty".to_string(),
            filter: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings
    ///
    /// # Environment Variables
    ///
    /// Nested keys use `__`, e.g.
    ///
    /// ```text
    /// CALCULATOR_SHELL__OVERFLOW_POLICY=abort
    /// CALCULATOR_SHELL__CLEAR_SCREEN=false
    /// CALCULATOR_LOG__FORMAT=json
    /// ```
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
