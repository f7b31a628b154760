use crate::domain::car::CarDetails;
use crate::domain::errors::ValidationError;
use tracing::warn;

/// Lowest present price (lakhs) the model gives sensible answers for.
pub const MIN_PRESENT_PRICE: f64 = 1.0;

/// Below this mileage the listing is treated as unrealistic.
pub const MIN_KMS_DRIVEN: u64 = 1000;

/// Plausibility checks run before a car is handed to the model.
pub struct CarInputValidator;

impl CarInputValidator {
    /// Checks price, then mileage, then age, and stops at the first failure.
    pub fn validate(details: &CarDetails) -> Result<(), ValidationError> {
        if !details.present_price.is_finite() || details.present_price < MIN_PRESENT_PRICE {
            warn!(
                "Validation FAILED: present price {} below floor {}",
                details.present_price, MIN_PRESENT_PRICE
            );
            return Err(ValidationError::PriceBelowFloor {
                min: MIN_PRESENT_PRICE,
                actual: details.present_price,
            });
        }

        if details.kms_driven < MIN_KMS_DRIVEN {
            warn!(
                "Validation FAILED: kms driven {} below floor {}",
                details.kms_driven, MIN_KMS_DRIVEN
            );
            return Err(ValidationError::MileageBelowFloor {
                min: MIN_KMS_DRIVEN,
                actual: details.kms_driven,
            });
        }

        // The form bounds age at zero; other callers are not bounded.
        if details.age_years < 0 {
            warn!("Validation FAILED: negative car age {}", details.age_years);
            return Err(ValidationError::NegativeAge {
                actual: details.age_years,
            });
        }

        Ok(())
    }
}
