//! On-disk model bundle: the regression model plus the column order it was
//! trained with.
//!
//! ```json
//! {
//!   "feature_names": ["Present_Price", "Kms_Driven", "Owner", "Age",
//!                     "Fuel_Type_Diesel", "Fuel_Type_Petrol",
//!                     "Seller_Type_Individual", "Transmission_Manual"],
//!   "model": { "kind": "linear", "intercept": 0.12, "coefficients": [0.43, ...] },
//!   "version": "2024-06",
//!   "reference_prices": { "min": 1.0, "avg": 5.0, "max": 12.0 }
//! }
//! ```

use crate::domain::errors::ModelError;
use crate::domain::report::ReferencePrices;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

pub type SmartcoreLinearModel = LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>;
pub type RandomForestModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Supported regression backends.
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressionModel {
    /// `intercept + Σ coefficient·x`, one coefficient per listed column.
    Linear {
        intercept: f64,
        coefficients: Vec<f64>,
    },
    SmartcoreLinear { model: SmartcoreLinearModel },
    RandomForest { model: RandomForestModel },
}

impl RegressionModel {
    pub fn kind(&self) -> &'static str {
        match self {
            RegressionModel::Linear { .. } => "linear",
            RegressionModel::SmartcoreLinear { .. } => "smartcore_linear",
            RegressionModel::RandomForest { .. } => "random_forest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RegressionModel::Linear { .. } => "Linear Regression",
            RegressionModel::SmartcoreLinear { .. } => "SmartCore Linear Regression",
            RegressionModel::RandomForest { .. } => "SmartCore Random Forest",
        }
    }

    /// Runs inference on a single row that is already in artifact column order.
    pub fn predict_row(&self, row: Vec<f64>) -> Result<f64, ModelError> {
        match self {
            RegressionModel::Linear {
                intercept,
                coefficients,
            } => {
                if coefficients.len() != row.len() {
                    return Err(ModelError::CoefficientMismatch {
                        expected: row.len(),
                        actual: coefficients.len(),
                    });
                }
                Ok(intercept
                    + coefficients
                        .iter()
                        .zip(row.iter())
                        .map(|(c, x)| c * x)
                        .sum::<f64>())
            }
            RegressionModel::SmartcoreLinear { model } => {
                let input = single_row_matrix(row)?;
                let predictions = model.predict(&input).map_err(|e| ModelError::Inference {
                    reason: e.to_string(),
                })?;
                first_prediction(predictions)
            }
            RegressionModel::RandomForest { model } => {
                let input = single_row_matrix(row)?;
                let predictions = model.predict(&input).map_err(|e| ModelError::Inference {
                    reason: e.to_string(),
                })?;
                first_prediction(predictions)
            }
        }
    }
}

fn single_row_matrix(row: Vec<f64>) -> Result<DenseMatrix<f64>, ModelError> {
    DenseMatrix::from_2d_vec(&vec![row]).map_err(|e| ModelError::Inference {
        reason: format!("Matrix creation failed: {}", e),
    })
}

fn first_prediction(predictions: Vec<f64>) -> Result<f64, ModelError> {
    predictions.first().copied().ok_or_else(|| ModelError::Inference {
        reason: "No prediction returned".to_string(),
    })
}

/// Deserialized model bundle.
#[derive(Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Training column order, used verbatim when arranging inputs.
    pub feature_names: Vec<String>,
    pub model: RegressionModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Reference prices pinned to this model, overriding configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_prices: Option<ReferencePrices>,
}

impl ModelArtifact {
    pub fn read(path: &Path) -> Result<Self, ModelError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ModelError::NotFound {
                    path: path.display().to_string(),
                }
            } else {
                ModelError::Io {
                    path: path.display().to_string(),
                    source: e,
                }
            }
        })?;

        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_linear_artifact() {
        let artifact = ModelArtifact::from_json(
            r#"{
                "feature_names": ["Present_Price", "Kms_Driven"],
                "model": {"kind": "linear", "intercept": 0.5, "coefficients": [0.4, 0.0001]},
                "reference_prices": {"min": 2.0, "avg": 6.0, "max": 15.0}
            }"#,
        )
        .unwrap();

        assert_eq!(artifact.feature_names.len(), 2);
        assert_eq!(artifact.model.kind(), "linear");
        assert!(artifact.version.is_none());
        assert_eq!(artifact.reference_prices.unwrap().max, 15.0);
    }

    #[test]
    fn test_linear_row_prediction() {
        let model = RegressionModel::Linear {
            intercept: 1.0,
            coefficients: vec![2.0, 0.5],
        };
        let value = model.predict_row(vec![3.0, 4.0]).unwrap();
        assert!((value - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_row_length_mismatch() {
        let model = RegressionModel::Linear {
            intercept: 0.0,
            coefficients: vec![1.0],
        };
        assert!(matches!(
            model.predict_row(vec![1.0, 2.0]),
            Err(ModelError::CoefficientMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_unknown_kind_is_a_parse_error() {
        let result = ModelArtifact::from_json(
            r#"{"feature_names": [], "model": {"kind": "xgboost"}}"#,
        );
        assert!(matches!(result, Err(ModelError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = ModelArtifact::read(Path::new("definitely/not/here/model.json"));
        assert!(matches!(result, Err(ModelError::NotFound { .. })));
    }
}
