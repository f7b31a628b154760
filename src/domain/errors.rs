use thiserror::Error;

/// Input rejected before any inference is attempted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Present Price must be at least ₹{min} lakh (got {actual})")]
    PriceBelowFloor { min: f64, actual: f64 },

    #[error("Kms Driven should be realistic ({min}+), got {actual}")]
    MileageBelowFloor { min: u64, actual: u64 },

    #[error("Car age cannot be negative (got {actual})")]
    NegativeAge { actual: i32 },
}

/// Errors related to the model artifact and inference backend
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model artifact not found at {path}")]
    NotFound { path: String },

    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown feature column in artifact: {0}")]
    UnknownFeature(String),

    #[error("Feature column listed twice in artifact: {0}")]
    DuplicateFeature(String),

    #[error("Artifact does not list feature column: {0}")]
    MissingFeature(String),

    #[error("Model expects {expected} coefficients, artifact has {actual}")]
    CoefficientMismatch { expected: usize, actual: usize },

    #[error("Inference failed: {reason}")]
    Inference { reason: String },

    #[error("Model returned a non-finite value: {value}")]
    NonFinite { value: f64 },
}

/// Everything that can stop a prediction cycle from producing a report.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Rejected(#[from] ValidationError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
