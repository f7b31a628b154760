use crate::domain::car::{CarDetails, FuelType, PreviousOwners, SellerType, Transmission};
use std::ops::RangeInclusive;

pub const PRESENT_PRICE_STEP: f64 = 0.1;
pub const KMS_DRIVEN_STEP: u64 = 100;
pub const AGE_RANGE: RangeInclusive<i32> = 0..=50;

/// Current values of the input form.
///
/// Defaults mirror an untouched form: zeros and the first option of every
/// selection.
#[derive(Debug, Clone, PartialEq)]
pub struct CarForm {
    pub present_price: f64,
    pub kms_driven: u64,
    pub owners: PreviousOwners,
    pub age_years: i32,
    pub fuel_type: FuelType,
    pub seller_type: SellerType,
    pub transmission: Transmission,
}

impl Default for CarForm {
    fn default() -> Self {
        Self {
            present_price: 0.0,
            kms_driven: 0,
            owners: PreviousOwners::Zero,
            age_years: 0,
            fuel_type: FuelType::Petrol,
            seller_type: SellerType::Dealer,
            transmission: Transmission::Manual,
        }
    }
}

impl CarForm {
    /// Pulls numeric fields back inside the control bounds.
    pub fn clamp(&mut self) {
        if !self.present_price.is_finite() || self.present_price < 0.0 {
            self.present_price = 0.0;
        }
        self.age_years = self.age_years.clamp(*AGE_RANGE.start(), *AGE_RANGE.end());
    }

    pub fn step_present_price(&mut self, steps: i32) {
        // Round to the step grid so repeated clicks do not accumulate float error.
        let next = self.present_price + f64::from(steps) * PRESENT_PRICE_STEP;
        self.present_price = (next * 10.0).round() / 10.0;
        self.clamp();
    }

    pub fn step_kms_driven(&mut self, steps: i64) {
        let delta = steps.unsigned_abs().saturating_mul(KMS_DRIVEN_STEP);
        self.kms_driven = if steps >= 0 {
            self.kms_driven.saturating_add(delta)
        } else {
            self.kms_driven.saturating_sub(delta)
        };
    }

    /// Immutable copy of the form handed to the prediction service.
    pub fn snapshot(&self) -> CarDetails {
        let mut bounded = self.clone();
        bounded.clamp();
        CarDetails {
            present_price: bounded.present_price,
            kms_driven: bounded.kms_driven,
            owners: bounded.owners,
            age_years: bounded.age_years,
            fuel_type: bounded.fuel_type,
            seller_type: bounded.seller_type,
            transmission: bounded.transmission,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_snapshot() {
        let details = CarForm::default().snapshot();
        assert_eq!(details.present_price, 0.0);
        assert_eq!(details.kms_driven, 0);
        assert_eq!(details.owners, PreviousOwners::Zero);
        assert_eq!(details.fuel_type, FuelType::Petrol);
        assert_eq!(details.seller_type, SellerType::Dealer);
        assert_eq!(details.transmission, Transmission::Manual);
    }

    #[test]
    fn test_snapshot_copies_every_field() {
        let form = CarForm {
            present_price: 5.0,
            kms_driven: 20_000,
            owners: PreviousOwners::Two,
            age_years: 3,
            fuel_type: FuelType::Cng,
            seller_type: SellerType::Individual,
            transmission: Transmission::Automatic,
        };
        let details = form.snapshot();
        assert_eq!(details.present_price, 5.0);
        assert_eq!(details.kms_driven, 20_000);
        assert_eq!(details.owners, PreviousOwners::Two);
        assert_eq!(details.age_years, 3);
        assert_eq!(details.fuel_type, FuelType::Cng);
        assert_eq!(details.seller_type, SellerType::Individual);
        assert_eq!(details.transmission, Transmission::Automatic);
    }

    #[test]
    fn test_bounds_are_enforced() {
        let form = CarForm {
            present_price: -4.0,
            age_years: 73,
            ..CarForm::default()
        };
        let details = form.snapshot();
        assert_eq!(details.present_price, 0.0);
        assert_eq!(details.age_years, 50);

        let form = CarForm {
            age_years: -2,
            ..CarForm::default()
        };
        assert_eq!(form.snapshot().age_years, 0);
    }

    #[test]
    fn test_steppers() {
        let mut form = CarForm::default();
        for _ in 0..3 {
            form.step_present_price(1);
        }
        assert_eq!(form.present_price, 0.3);
        form.step_present_price(-10);
        assert_eq!(form.present_price, 0.0);

        form.step_kms_driven(15);
        assert_eq!(form.kms_driven, 1500);
        form.step_kms_driven(-20);
        assert_eq!(form.kms_driven, 0);
    }
}
