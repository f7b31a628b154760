//! File locations for the model artifact and the logo.

use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "car_price_model.json";
pub const DEFAULT_LOGO_PATH: &str = "turbocare_logo.jpg";

/// Asset environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEnvConfig {
    pub model_path: PathBuf,
    pub logo_path: PathBuf,
}

impl Default for AssetEnvConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
        }
    }
}

impl AssetEnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            model_path: lookup("CARPRICE_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH)),
            logo_path: lookup("CARPRICE_LOGO_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOGO_PATH)),
        }
    }
}
