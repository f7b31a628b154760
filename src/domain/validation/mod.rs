pub mod input_rules;

pub use input_rules::{CarInputValidator, MIN_KMS_DRIVEN, MIN_PRESENT_PRICE};
