//! Command-line configuration.
//!
//! Every section is optional; an absent file or section falls back to the
//! built-in defaults.
//!
//! ```toml
//! log_level = "debug"
//! log_file = "company-setup.log"
//! token_path = ".company-setup-token"
//!
//! [trade_name]
//! backend = "http"
//! endpoint = "http://localhost:8000/tradename"
//! timeout_secs = 5
//!
//! [pricing]
//! base = 5000
//! per_activity = 1000
//!
//! [policy]
//! require_full_ownership = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use setup_core::services::ServiceConfig;
use setup_core::{BatchPolicy, PricingSchedule};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub token_path: PathBuf,
    pub trade_name: ServiceConfig,
    pub pricing: PricingSchedule,
    pub policy: BatchPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            token_path: PathBuf::from(".company-setup-token"),
            trade_name: ServiceConfig::default(),
            pricing: PricingSchedule::default(),
            policy: BatchPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "config loaded");
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.trade_name.backend, "mock");
        assert_eq!(config.pricing.base_cost, dec!(5000));
        assert!(!config.policy.require_full_ownership);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            log_level = "debug"

            [trade_name]
            backend = "http"

            [pricing]
            base = 6000

            [policy]
            require_full_ownership = true
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.trade_name.backend, "http");
        assert_eq!(config.trade_name.timeout_secs, 10);
        assert_eq!(config.pricing.base_cost, dec!(6000));
        assert_eq!(config.pricing.per_activity, dec!(1000));
        assert!(config.policy.require_full_ownership);
    }

    #[test]
    fn unknown_value_type_is_a_parse_error() {
        let err = AppConfig::from_toml_str("log_level = 3").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/company-setup.toml"))).unwrap_err();

        assert!(err.to_string().contains("/nonexistent/company-setup.toml"));
    }

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }
}
