pub mod car_form;
pub mod prediction_view_model;

pub use car_form::CarForm;
pub use prediction_view_model::{PredictionOutcome, PredictionViewModel};
