use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fuel the car runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    #[serde(rename = "CNG")]
    Cng,
}

impl FuelType {
    pub const ALL: [FuelType; 3] = [FuelType::Petrol, FuelType::Diesel, FuelType::Cng];

    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Cng => "CNG",
        }
    }
}

/// Who is selling the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SellerType {
    Dealer,
    Individual,
}

impl SellerType {
    pub const ALL: [SellerType; 2] = [SellerType::Dealer, SellerType::Individual];

    pub fn label(&self) -> &'static str {
        match self {
            SellerType::Dealer => "Dealer",
            SellerType::Individual => "Individual",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    pub const ALL: [Transmission; 2] = [Transmission::Manual, Transmission::Automatic];

    pub fn label(&self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
        }
    }
}

/// Number of previous owners. The trained schema only knows 0 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PreviousOwners {
    Zero,
    One,
    Two,
    Three,
}

impl PreviousOwners {
    pub const ALL: [PreviousOwners; 4] = [
        PreviousOwners::Zero,
        PreviousOwners::One,
        PreviousOwners::Two,
        PreviousOwners::Three,
    ];

    pub fn count(&self) -> u8 {
        match self {
            PreviousOwners::Zero => 0,
            PreviousOwners::One => 1,
            PreviousOwners::Two => 2,
            PreviousOwners::Three => 3,
        }
    }
}

impl From<PreviousOwners> for u8 {
    fn from(owners: PreviousOwners) -> Self {
        owners.count()
    }
}

impl TryFrom<u8> for PreviousOwners {
    type Error = ParseCategoryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PreviousOwners::Zero),
            1 => Ok(PreviousOwners::One),
            2 => Ok(PreviousOwners::Two),
            3 => Ok(PreviousOwners::Three),
            other => Err(ParseCategoryError {
                field: "owner",
                value: other.to_string(),
                expected: "0, 1, 2 or 3",
            }),
        }
    }
}

impl fmt::Display for PreviousOwners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

display_label!(FuelType, SellerType, Transmission);

/// Raised when a categorical value typed by a user is not one of the known options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: '{value}' (expected {expected})")]
pub struct ParseCategoryError {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for FuelType {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "petrol" => Ok(FuelType::Petrol),
            "diesel" => Ok(FuelType::Diesel),
            "cng" => Ok(FuelType::Cng),
            _ => Err(ParseCategoryError {
                field: "fuel type",
                value: s.to_string(),
                expected: "petrol, diesel or cng",
            }),
        }
    }
}

impl FromStr for SellerType {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dealer" => Ok(SellerType::Dealer),
            "individual" => Ok(SellerType::Individual),
            _ => Err(ParseCategoryError {
                field: "seller type",
                value: s.to_string(),
                expected: "dealer or individual",
            }),
        }
    }
}

impl FromStr for Transmission {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manual" => Ok(Transmission::Manual),
            "automatic" => Ok(Transmission::Automatic),
            _ => Err(ParseCategoryError {
                field: "transmission",
                value: s.to_string(),
                expected: "manual or automatic",
            }),
        }
    }
}

impl FromStr for PreviousOwners {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseCategoryError {
            field: "owner",
            value: s.to_string(),
            expected: "0, 1, 2 or 3",
        };
        let count: u8 = s.trim().parse().map_err(|_| invalid())?;
        PreviousOwners::try_from(count).map_err(|_| invalid())
    }
}

/// Snapshot of everything the user entered when "Predict" was pressed.
///
/// Prices are in lakhs. `age_years` is signed so that a negative age coming
/// from a non-bounded caller (CLI, tests) reaches validation instead of
/// being impossible to represent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarDetails {
    pub present_price: f64,
    pub kms_driven: u64,
    pub owners: PreviousOwners,
    pub age_years: i32,
    pub fuel_type: FuelType,
    pub seller_type: SellerType,
    pub transmission: Transmission,
}
