pub mod model_artifact;
pub mod predictor;
pub mod smartcore_predictor;

pub use model_artifact::{ModelArtifact, RegressionModel};
pub use predictor::PricePredictor;
pub use smartcore_predictor::SmartCorePredictor;
