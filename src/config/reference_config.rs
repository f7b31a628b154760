//! Reference prices drawn next to the estimate.

use crate::domain::report::ReferencePrices;
use anyhow::{Context, Result, anyhow};

fn parse_price(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f64) -> Result<f64> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .with_context(|| format!("Failed to parse {} ('{}')", key, raw)),
        None => Ok(default),
    }
}

/// Reference price environment configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceEnvConfig {
    pub prices: ReferencePrices,
}

impl ReferenceEnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = ReferencePrices::default();
        let prices = ReferencePrices {
            min: parse_price(&lookup, "CARPRICE_MIN_PRICE", defaults.min)?,
            avg: parse_price(&lookup, "CARPRICE_AVG_PRICE", defaults.avg)?,
            max: parse_price(&lookup, "CARPRICE_MAX_PRICE", defaults.max)?,
        };
        prices.check().map_err(|e| anyhow!(e))?;

        Ok(Self { prices })
    }
}
