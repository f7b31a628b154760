use crate::domain::car::CarDetails;
use crate::domain::errors::PredictionError;
use crate::domain::report::PriceReport;

/// Result of the last "Predict" click, tied to the inputs it was computed from.
#[derive(Debug)]
pub struct PredictionOutcome {
    pub submitted: CarDetails,
    pub result: Result<PriceReport, PredictionError>,
}

impl PredictionOutcome {
    /// Text shown under the form: the estimate or the rejection reason.
    pub fn message(&self) -> String {
        match &self.result {
            Ok(report) => format!("💰 {}", report.headline()),
            Err(e) => format!("❌ {}", e),
        }
    }
}

/// Keeps the last outcome only while the form still matches it.
#[derive(Debug, Default)]
pub struct PredictionViewModel {
    outcome: Option<PredictionOutcome>,
}

impl PredictionViewModel {
    pub fn record(&mut self, submitted: CarDetails, result: Result<PriceReport, PredictionError>) {
        self.outcome = Some(PredictionOutcome { submitted, result });
    }

    /// Drops a stale outcome once any field differs from what was submitted.
    pub fn current(&mut self, form: &CarDetails) -> Option<&PredictionOutcome> {
        if self
            .outcome
            .as_ref()
            .is_some_and(|o| &o.submitted != form)
        {
            self.outcome = None;
        }
        self.outcome.as_ref()
    }
}
