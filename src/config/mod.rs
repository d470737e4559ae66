//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `CURRICULA_SOCIAL` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use curricula_social::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod social;

pub use error::{ConfigError, ConfigValidationError};
pub use social::SocialConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Social interaction limits (pagination, content length)
    #[serde(default)]
    pub social: SocialConfig,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads variables with the
    /// `CURRICULA_SOCIAL` prefix, e.g.
    /// `CURRICULA_SOCIAL__SOCIAL__DEFAULT_ITEMS_PER_PAGE=20`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CURRICULA_SOCIAL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if any configuration value is
    /// invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.social.validate()?;
        Ok(())
    }
}

fn default_log_level() -> String {
    "info,curricula_social=debug".to_string()
}
