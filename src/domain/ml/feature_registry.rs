use crate::domain::car::{CarDetails, FuelType, SellerType, Transmission};
use crate::domain::errors::ModelError;

/// Column names in canonical order.
/// This order MUST match the one used when the shipped model was trained.
/// Artifacts may list the columns in a different order; see `FeatureSchema`.
pub const FEATURE_NAMES: &[&str] = &[
    "Present_Price",
    "Kms_Driven",
    "Owner",
    "Age",
    "Fuel_Type_Diesel",
    "Fuel_Type_Petrol",
    "Seller_Type_Individual",
    "Transmission_Manual",
];

/// One model input column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    PresentPrice,
    KmsDriven,
    Owner,
    Age,
    FuelDiesel,
    FuelPetrol,
    SellerIndividual,
    TransmissionManual,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::PresentPrice,
        Feature::KmsDriven,
        Feature::Owner,
        Feature::Age,
        Feature::FuelDiesel,
        Feature::FuelPetrol,
        Feature::SellerIndividual,
        Feature::TransmissionManual,
    ];

    /// Position in the canonical vector.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn column_name(&self) -> &'static str {
        FEATURE_NAMES[self.index()]
    }

    /// Resolves a training column name. `Car_Age` is accepted for `Age`.
    pub fn from_column_name(name: &str) -> Option<Self> {
        match name {
            "Car_Age" => Some(Feature::Age),
            other => Feature::ALL
                .iter()
                .copied()
                .find(|f| f.column_name() == other),
        }
    }
}

/// Encoded model input in canonical column order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; 8]);

impl FeatureVector {
    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

fn indicator(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

/// Encodes user input the way the training pipeline did.
///
/// Categoricals drop one level: CNG is both fuel flags at zero, Dealer and
/// Automatic are zero. Total: every input produces a vector.
pub fn encode(details: &CarDetails) -> FeatureVector {
    FeatureVector([
        details.present_price,
        details.kms_driven as f64,
        f64::from(details.owners.count()),
        f64::from(details.age_years),
        indicator(details.fuel_type == FuelType::Diesel),
        indicator(details.fuel_type == FuelType::Petrol),
        indicator(details.seller_type == SellerType::Individual),
        indicator(details.transmission == Transmission::Manual),
    ])
}

/// Column order expected by a concrete model artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: Vec<Feature>,
}

impl FeatureSchema {
    /// The canonical schema, identical to `FEATURE_NAMES`.
    pub fn canonical() -> Self {
        Self {
            columns: Feature::ALL.to_vec(),
        }
    }

    /// Builds a schema from an artifact's column list, used verbatim.
    ///
    /// Every known feature must appear exactly once; anything else would
    /// silently misalign the model input.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ModelError> {
        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let feature = Feature::from_column_name(name)
                .ok_or_else(|| ModelError::UnknownFeature(name.to_string()))?;
            if columns.contains(&feature) {
                return Err(ModelError::DuplicateFeature(name.to_string()));
            }
            columns.push(feature);
        }

        if let Some(missing) = Feature::ALL.iter().find(|f| !columns.contains(*f)) {
            return Err(ModelError::MissingFeature(missing.column_name().to_string()));
        }

        Ok(Self { columns })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Lays out the vector in this schema's column order.
    pub fn arrange(&self, features: &FeatureVector) -> Vec<f64> {
        self.columns.iter().map(|f| features.get(*f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::car::PreviousOwners;

    fn sample() -> CarDetails {
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
    fn test_feature_vector_length() {
        let vec = encode(&sample());
        assert_eq!(vec.as_slice().len(), FEATURE_NAMES.len());
    }

    #[test]
    fn test_reference_encoding() {
        let vec = encode(&sample());
        assert_eq!(
            vec.as_slice(),
            &[5.0, 20000.0, 0.0, 3.0, 0.0, 1.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_cng_dealer_automatic_encode_to_zero_flags() {
        let details = CarDetails {
            fuel_type: FuelType::Cng,
            seller_type: SellerType::Dealer,
            transmission: Transmission::Automatic,
            ..sample()
        };
        let vec = encode(&details);
        assert_eq!(&vec.as_slice()[4..], &[0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_numeric_prefix_and_binary_flags_for_all_categories() {
        for fuel_type in FuelType::ALL {
            for seller_type in SellerType::ALL {
                for transmission in Transmission::ALL {
                    for owners in PreviousOwners::ALL {
                        let details = CarDetails {
                            present_price: 7.25,
                            kms_driven: 45_500,
                            owners,
                            age_years: 11,
                            fuel_type,
                            seller_type,
                            transmission,
                        };
                        let vec = encode(&details);
                        assert_eq!(
                            &vec.as_slice()[..4],
                            &[7.25, 45_500.0, f64::from(owners.count()), 11.0]
                        );
                        assert!(vec.as_slice()[4..].iter().all(|v| *v == 0.0 || *v == 1.0));
                        // At most one fuel flag is set.
                        assert!(vec.get(Feature::FuelDiesel) + vec.get(Feature::FuelPetrol) <= 1.0);
                        assert_eq!(encode(&details), vec);
                    }
                }
            }
        }
    }

    #[test]
    fn test_encoding_is_total_for_extreme_values() {
        let details = CarDetails {
            present_price: f64::MAX,
            kms_driven: u64::MAX,
            age_years: i32::MIN,
            ..sample()
        };
        let vec = encode(&details);
        assert_eq!(vec.get(Feature::PresentPrice), f64::MAX);
        assert_eq!(vec.get(Feature::Age), f64::from(i32::MIN));
    }

    #[test]
    fn test_schema_arranges_in_artifact_order() {
        let schema = FeatureSchema::from_names(&[
            "Transmission_Manual",
            "Present_Price",
            "Kms_Driven",
            "Owner",
            "Car_Age",
            "Fuel_Type_Diesel",
            "Fuel_Type_Petrol",
            "Seller_Type_Individual",
        ])
        .unwrap();
        let row = schema.arrange(&encode(&sample()));
        assert_eq!(row, vec![1.0, 5.0, 20000.0, 0.0, 3.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_canonical_schema_matches_feature_names() {
        let schema = FeatureSchema::from_names(FEATURE_NAMES).unwrap();
        assert_eq!(schema, FeatureSchema::canonical());
        assert_eq!(schema.arrange(&encode(&sample())), encode(&sample()).as_slice());
    }

    #[test]
    fn test_schema_rejects_misaligned_columns() {
        let unknown = FeatureSchema::from_names(&["Present_Price", "Year"]);
        assert!(matches!(unknown, Err(ModelError::UnknownFeature(name)) if name == "Year"));

        let duplicate = FeatureSchema::from_names(&["Owner", "Owner"]);
        assert!(matches!(duplicate, Err(ModelError::DuplicateFeature(_))));

        let missing = FeatureSchema::from_names(&FEATURE_NAMES[..7]);
        assert!(
            matches!(missing, Err(ModelError::MissingFeature(name)) if name == "Transmission_Manual")
        );
    }
}
