use crate::application::ml::PricePredictor;
use crate::domain::car::CarDetails;
use crate::domain::errors::{ModelError, PredictionError};
use crate::domain::ml::encode;
use crate::domain::ports::ChartRenderer;
use crate::domain::report::{EstimatedPrice, PriceReport, ReferencePrices};
use crate::domain::validation::CarInputValidator;
use std::sync::Arc;
use tracing::{error, info};

/// Runs one prediction cycle for a submitted form.
///
/// The predictor is shared read-only; the service holds no per-request state.
#[derive(Clone)]
pub struct PredictionService {
    predictor: Arc<dyn PricePredictor>,
    references: ReferencePrices,
}

impl PredictionService {
    pub fn new(predictor: Arc<dyn PricePredictor>, references: ReferencePrices) -> Self {
        Self {
            predictor,
            references,
        }
    }

    /// Validates, encodes, infers and rounds. No inference happens when
    /// validation fails.
    pub fn predict(&self, details: &CarDetails) -> Result<PriceReport, PredictionError> {
        CarInputValidator::validate(details)?;

        let features = encode(details);
        let raw = self.predictor.predict(&features).inspect_err(|e| {
            error!("Prediction failed on {}: {}", self.predictor.name(), e);
        })?;

        let estimate =
            EstimatedPrice::from_raw(raw).ok_or(ModelError::NonFinite { value: raw })?;

        info!(
            present_price = details.present_price,
            kms_driven = details.kms_driven,
            age = details.age_years,
            raw,
            estimate = %estimate.lakhs(),
            "Estimated selling price"
        );

        Ok(PriceReport::new(estimate, &self.references))
    }

    /// Same as `predict`, then draws the comparison chart on success.
    pub fn predict_and_render<R: ChartRenderer + ?Sized>(
        &self,
        details: &CarDetails,
        renderer: &mut R,
    ) -> Result<PriceReport, PredictionError> {
        let report = self.predict(details)?;
        renderer.render_chart(&report.chart);
        Ok(report)
    }

    pub fn references(&self) -> &ReferencePrices {
        &self.references
    }

    pub fn model_name(&self) -> &str {
        self.predictor.name()
    }

    pub fn model_version(&self) -> &str {
        self.predictor.version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::car::{FuelType, PreviousOwners, SellerType, Transmission};
    use crate::domain::errors::ValidationError;
    use crate::domain::ml::FeatureVector;
    use crate::domain::report::ComparisonChart;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    /// Returns a fixed value and remembers what it was asked.
    struct FixedPredictor {
        value: f64,
        seen: Mutex<Vec<FeatureVector>>,
    }

    impl FixedPredictor {
        fn new(value: f64) -> Arc<Self> {
            Arc::new(Self {
                value,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl PricePredictor for FixedPredictor {
        fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
            self.seen.lock().unwrap().push(*features);
            Ok(self.value)
        }

        fn name(&self) -> &str {
            "fixed"
        }

        fn version(&self) -> &str {
            "v0"
        }
    }

    struct FailingPredictor;

    impl PricePredictor for FailingPredictor {
        fn predict(&self, _features: &FeatureVector) -> Result<f64, ModelError> {
            Err(ModelError::Inference {
                reason: "backend down".to_string(),
            })
        }

        fn name(&self) -> &str {
            "failing"
        }

        fn version(&self) -> &str {
            "v0"
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        charts: Vec<ComparisonChart>,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render_chart(&mut self, chart: &ComparisonChart) {
            self.charts.push(chart.clone());
        }
    }

    fn car() -> CarDetails {
        CarDetails {
            present_price: 5.0,
            kms_driven: 20_000,
            owners: PreviousOwners::Zero,
            age_years: 3,
            fuel_type: FuelType::Petrol,
            seller_type: SellerType::Dealer,
            transmission: Transmission::Manual,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let predictor = FixedPredictor::new(4.321);
        let service = PredictionService::new(predictor.clone(), ReferencePrices::default());

        let report = service.predict(&car()).unwrap();

        assert_eq!(report.estimate.lakhs(), dec!(4.32));
        assert_eq!(report.chart.y_max, 14.0);
        let seen = predictor.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].as_slice(),
            &[5.0, 20000.0, 0.0, 3.0, 0.0, 1.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_validation_failure_skips_inference() {
        let predictor = FixedPredictor::new(4.0);
        let service = PredictionService::new(predictor.clone(), ReferencePrices::default());

        let details = CarDetails {
            present_price: 0.5,
            kms_driven: 500,
            age_years: -1,
            ..car()
        };
        let err = service.predict(&details).unwrap_err();

        assert!(matches!(
            err,
            PredictionError::Rejected(ValidationError::PriceBelowFloor { .. })
        ));
        assert!(predictor.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_inference_failure_is_reported() {
        let service = PredictionService::new(Arc::new(FailingPredictor), ReferencePrices::default());
        let err = service.predict(&car()).unwrap_err();
        assert!(matches!(err, PredictionError::Model(ModelError::Inference { .. })));
    }

    #[test]
    fn test_non_finite_prediction_is_reported() {
        let service = PredictionService::new(FixedPredictor::new(f64::NAN), ReferencePrices::default());
        assert!(matches!(
            service.predict(&car()),
            Err(PredictionError::Model(ModelError::NonFinite { .. }))
        ));
    }

    #[test]
    fn test_chart_uses_configured_references() {
        let references = ReferencePrices {
            min: 2.0,
            avg: 6.5,
            max: 20.0,
        };
        let service = PredictionService::new(FixedPredictor::new(25.004), references);
        let mut renderer = RecordingRenderer::default();

        let report = service.predict_and_render(&car(), &mut renderer).unwrap();

        assert_eq!(renderer.charts.len(), 1);
        assert_eq!(renderer.charts[0], report.chart);
        let values: Vec<f64> = report.chart.bars.iter().map(|b| b.value).collect();
        assert_eq!(values, vec![2.0, 6.5, 20.0, 25.0]);
        assert_eq!(report.chart.y_max, 27.0);
    }

    #[test]
    fn test_rejected_prediction_draws_nothing() {
        let service = PredictionService::new(FixedPredictor::new(4.0), ReferencePrices::default());
        let mut renderer = RecordingRenderer::default();
        let details = CarDetails {
            kms_driven: 999,
            ..car()
        };

        assert!(service.predict_and_render(&details, &mut renderer).is_err());
        assert!(renderer.charts.is_empty());
    }
}
