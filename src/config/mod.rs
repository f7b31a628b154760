//! Configuration module for the car price predictor.
//!
//! Values come from environment variables (a `.env` file is loaded by the
//! binaries first), grouped by concern: assets and reference prices.

mod asset_config;
mod reference_config;

pub use asset_config::{AssetEnvConfig, DEFAULT_LOGO_PATH, DEFAULT_MODEL_PATH};
pub use reference_config::ReferenceEnvConfig;

use crate::domain::report::ReferencePrices;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Main application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub model_path: PathBuf,
    pub logo_path: PathBuf,
    pub reference_prices: ReferencePrices,
}

impl Default for Config {
    fn default() -> Self {
        let assets = AssetEnvConfig::default();
        Self {
            model_path: assets.model_path,
            logo_path: assets.logo_path,
            reference_prices: ReferencePrices::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let assets = AssetEnvConfig::from_lookup(&lookup);
        let references =
            ReferenceEnvConfig::from_lookup(&lookup).context("Failed to load reference prices")?;

        info!(
            "Configuration loaded: model={:?}, logo={:?}, reference prices {}/{}/{}",
            assets.model_path,
            assets.logo_path,
            references.prices.min,
            references.prices.avg,
            references.prices.max
        );

        Ok(Self {
            model_path: assets.model_path,
            logo_path: assets.logo_path,
            reference_prices: references.prices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.model_path, PathBuf::from("car_price_model.json"));
        assert_eq!(config.reference_prices.max, 12.0);
    }

    #[test]
    fn test_config_from_map() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CARPRICE_MODEL_PATH", "models/v2.json"),
            ("CARPRICE_LOGO_PATH", "assets/logo.png"),
            ("CARPRICE_MIN_PRICE", "0.5"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.model_path, PathBuf::from("models/v2.json"));
        assert_eq!(config.logo_path, PathBuf::from("assets/logo.png"));
        assert_eq!(config.reference_prices.min, 0.5);
        assert_eq!(config.reference_prices.avg, 5.0);
    }

    #[test]
    fn test_invalid_reference_price_has_context() {
        let err = Config::from_lookup(|key| {
            (key == "CARPRICE_AVG_PRICE").then(|| "abc".to_string())
        })
        .unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load reference prices"));
    }
}
