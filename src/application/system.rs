use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::application::ml::{ModelArtifact, SmartCorePredictor};
use crate::application::prediction_service::PredictionService;
use crate::config::Config;
use crate::domain::report::ReferencePrices;
use crate::infrastructure::assets::LogoAsset;

/// Everything loaded once at process start.
pub struct Application {
    pub config: Config,
    pub service: PredictionService,
    pub logo: LogoAsset,
}

impl Application {
    /// Loads the model artifact and the logo.
    ///
    /// A missing or corrupt artifact fails the build; a missing logo does not.
    pub fn build(config: Config) -> Result<Self> {
        info!("Loading model artifact from {:?}", config.model_path);
        let artifact = ModelArtifact::read(&config.model_path)
            .with_context(|| format!("Failed to load model artifact {:?}", config.model_path))?;

        let references = Self::resolve_references(&config, artifact.reference_prices)?;
        let predictor = SmartCorePredictor::from_artifact(artifact)
            .context("Model artifact is not usable")?;
        let service = PredictionService::new(Arc::new(predictor), references);

        let logo = LogoAsset::load(&config.logo_path);

        Ok(Self {
            config,
            service,
            logo,
        })
    }

    /// Reference prices pinned to the artifact win over configured ones.
    fn resolve_references(
        config: &Config,
        from_artifact: Option<ReferencePrices>,
    ) -> Result<ReferencePrices> {
        match from_artifact {
            Some(prices) => {
                prices
                    .check()
                    .map_err(anyhow::Error::msg)
                    .context("Invalid reference prices in model artifact")?;
                info!(
                    "Using reference prices from model artifact: {}/{}/{}",
                    prices.min, prices.avg, prices.max
                );
                Ok(prices)
            }
            None => Ok(config.reference_prices),
        }
    }
}
