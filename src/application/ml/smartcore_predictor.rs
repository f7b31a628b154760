use super::model_artifact::{ModelArtifact, RegressionModel};
use super::predictor::PricePredictor;
use crate::domain::errors::ModelError;
use crate::domain::ml::{FeatureSchema, FeatureVector};
use tracing::{debug, info};

/// Predictor backed by a deserialized model artifact.
pub struct SmartCorePredictor {
    schema: FeatureSchema,
    model: RegressionModel,
    version: String,
}

impl SmartCorePredictor {
    /// Checks the artifact's column list and model shape before accepting it.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        let schema = FeatureSchema::from_names(&artifact.feature_names)?;

        if let RegressionModel::Linear { coefficients, .. } = &artifact.model
            && coefficients.len() != schema.len()
        {
            return Err(ModelError::CoefficientMismatch {
                expected: schema.len(),
                actual: coefficients.len(),
            });
        }

        let version = artifact
            .version
            .unwrap_or_else(|| "unversioned".to_string());

        info!(
            "Loaded {} model ({}) with {} feature columns",
            artifact.model.kind(),
            version,
            schema.len()
        );

        Ok(Self {
            schema,
            model: artifact.model,
            version,
        })
    }
}

impl PricePredictor for SmartCorePredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let row = self.schema.arrange(features);
        debug!("Model input row: {:?}", row);

        let value = self.model.predict_row(row)?;
        if !value.is_finite() {
            return Err(ModelError::NonFinite { value });
        }
        Ok(value)
    }

    fn name(&self) -> &str {
        self.model.display_name()
    }

    fn version(&self) -> &str {
        &self.version
    }
}
