use crate::domain::errors::ModelError;
use crate::domain::ml::FeatureVector;

/// Interface for price regression models
pub trait PricePredictor: Send + Sync {
    /// Predict the selling price in lakhs (unrounded)
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
