//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! and an optional config file using the `config` and `dotenvy` crates. Environment
//! variables use the `MOOD_COMPASS` prefix and nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use mood_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Classifier enabled: {}", config.features.enable_ai_classifier);
//! ```

mod ai;
mod error;
mod features;
mod logging;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an optional config file.
pub const CONFIG_PATH_ENV: &str = "MOOD_COMPASS_CONFIG";

const ENV_PREFIX: &str = "MOOD_COMPASS";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// deterministic-only configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// AI classifier configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// Reads the file named by `MOOD_COMPASS_CONFIG`, if set, before
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or values cannot be
    /// parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering sources in this order:
    ///
    /// 1. `.env` file if present (for development)
    /// 2. Config file at `path`, or at `MOOD_COMPASS_CONFIG` when `path` is `None`
    /// 3. Environment variables with `MOOD_COMPASS` prefix
    ///
    /// # Environment Variable Format
    ///
    /// - `MOOD_COMPASS__AI__OPENAI_API_KEY=sk-...` -> `ai.openai_api_key = sk-...`
    /// - `MOOD_COMPASS__FEATURES__ENABLE_AI_CLASSIFIER=true` -> `features.enable_ai_classifier = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, or values
    /// cannot be parsed into expected types.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let file = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut builder = config::Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(config::File::from(file).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX).separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid, or if
    /// the AI classifier is enabled without an API key.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.logging.validate()?;

        if self.features.enable_ai_classifier && !self.ai.has_openai() {
            return Err(ValidationError::MissingRequired(
                "MOOD_COMPASS__AI__OPENAI_API_KEY",
            ));
        }

        Ok(())
    }

    /// Check if the AI classifier should be wired in
    pub fn classifier_enabled(&self) -> bool {
        self.features.enable_ai_classifier && self.ai.has_openai()
    }
}
