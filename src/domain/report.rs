//! Price estimate and the comparison chart shown next to it.
//!
//! Everything here is plain data: the desktop UI and the CLI draw the same
//! `ComparisonChart` with their own renderer.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Headroom added above the tallest bar.
pub const CHART_HEADROOM: f64 = 2.0;

pub const CHART_Y_LABEL: &str = "Selling Price (Lakhs)";

/// Static market reference points (lakhs) the estimate is compared with.
///
/// These belong to the model that was shipped, not to the code: an artifact
/// may carry its own set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePrices {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

impl Default for ReferencePrices {
    fn default() -> Self {
        Self {
            min: 1.0,
            avg: 5.0,
            max: 12.0,
        }
    }
}

impl ReferencePrices {
    /// Returns a description of the first inconsistency, if any.
    pub fn check(&self) -> Result<(), String> {
        let values = [self.min, self.avg, self.max];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(format!(
                "reference prices must be finite and non-negative, got {}/{}/{}",
                self.min, self.avg, self.max
            ));
        }
        if self.min > self.avg || self.avg > self.max {
            return Err(format!(
                "reference prices must satisfy min <= avg <= max, got {}/{}/{}",
                self.min, self.avg, self.max
            ));
        }
        Ok(())
    }
}

/// Model output rounded to two decimals, in lakhs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EstimatedPrice(Decimal);

impl EstimatedPrice {
    /// Rounds the exact binary value of a raw model output. Exact midpoints
    /// go to the even neighbour. Returns None for NaN, infinities and values
    /// outside Decimal's range.
    pub fn from_raw(raw: f64) -> Option<Self> {
        Decimal::from_f64_retain(raw).map(|d| Self(d.round_dp(2)))
    }

    pub fn lakhs(&self) -> Decimal {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

impl fmt::Display for EstimatedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹ {:.2} lakhs", self.0)
    }
}

/// 8-bit RGB colour, kept free of any UI toolkit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

pub struct ChartPalette;

impl ChartPalette {
    pub const MIN: Rgb = Rgb(0xFC, 0x0E, 0x0E);
    pub const AVG: Rgb = Rgb(0xD0, 0xF8, 0x4E);
    pub const MAX: Rgb = Rgb(0x23, 0xC2, 0x65);
    pub const ESTIMATE: Rgb = Rgb(0x40, 0x34, 0xE0);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: f64,
    pub color: Rgb,
}

impl ChartBar {
    /// Text drawn above the bar, e.g. `₹4.32L`.
    pub fn value_label(&self) -> String {
        format!("₹{}L", self.value)
    }
}

/// Four bars: min, average and max reference prices, then the estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonChart {
    pub bars: Vec<ChartBar>,
    pub y_label: &'static str,
    pub y_max: f64,
}

impl ComparisonChart {
    pub fn new(references: &ReferencePrices, estimate: &EstimatedPrice) -> Self {
        let bars = vec![
            ChartBar {
                label: "Min Price",
                value: references.min,
                color: ChartPalette::MIN,
            },
            ChartBar {
                label: "Avg Price",
                value: references.avg,
                color: ChartPalette::AVG,
            },
            ChartBar {
                label: "Max Price",
                value: references.max,
                color: ChartPalette::MAX,
            },
            ChartBar {
                label: "Your Car",
                value: estimate.as_f64(),
                color: ChartPalette::ESTIMATE,
            },
        ];
        let tallest = bars
            .iter()
            .map(|b| b.value)
            .fold(f64::NEG_INFINITY, f64::max);

        Self {
            bars,
            y_label: CHART_Y_LABEL,
            y_max: tallest + CHART_HEADROOM,
        }
    }

    pub fn categories(&self) -> Vec<&'static str> {
        self.bars.iter().map(|b| b.label).collect()
    }
}

/// Result of one successful prediction cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceReport {
    pub estimate: EstimatedPrice,
    pub chart: ComparisonChart,
}

impl PriceReport {
    pub fn new(estimate: EstimatedPrice, references: &ReferencePrices) -> Self {
        Self {
            chart: ComparisonChart::new(references, &estimate),
            estimate,
        }
    }

    pub fn headline(&self) -> String {
        format!("Estimated Selling Price: {}", self.estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounding_to_two_decimals() {
        assert_eq!(EstimatedPrice::from_raw(4.321).unwrap().lakhs(), dec!(4.32));
        assert_eq!(EstimatedPrice::from_raw(4.329).unwrap().lakhs(), dec!(4.33));
        assert!(EstimatedPrice::from_raw(f64::NAN).is_none());
        assert!(EstimatedPrice::from_raw(f64::INFINITY).is_none());
    }

    #[test]
    fn test_rounding_near_midpoints_uses_stored_value() {
        // 8.345 is stored just above the midpoint, 2.675 and 1.115 just below.
        assert_eq!(EstimatedPrice::from_raw(8.345).unwrap().lakhs(), dec!(8.35));
        assert_eq!(EstimatedPrice::from_raw(2.675).unwrap().lakhs(), dec!(2.67));
        assert_eq!(EstimatedPrice::from_raw(1.115).unwrap().lakhs(), dec!(1.11));
        // 0.125 is exact in binary: a true midpoint goes to even.
        assert_eq!(EstimatedPrice::from_raw(0.125).unwrap().lakhs(), dec!(0.12));
    }

    #[test]
    fn test_headline_format() {
        let report = PriceReport::new(
            EstimatedPrice::from_raw(3.5).unwrap(),
            &ReferencePrices::default(),
        );
        assert_eq!(
            report.headline(),
            "Estimated Selling Price: ₹ 3.50 lakhs"
        );
    }

    #[test]
    fn test_chart_has_fixed_categories_and_colors() {
        let chart = ComparisonChart::new(
            &ReferencePrices::default(),
            &EstimatedPrice::from_raw(4.321).unwrap(),
        );
        assert_eq!(
            chart.categories(),
            vec!["Min Price", "Avg Price", "Max Price", "Your Car"]
        );
        let values: Vec<f64> = chart.bars.iter().map(|b| b.value).collect();
        assert_eq!(values, vec![1.0, 5.0, 12.0, 4.32]);
        let colors: Vec<String> = chart.bars.iter().map(|b| b.color.hex()).collect();
        assert_eq!(colors, vec!["#FC0E0E", "#D0F84E", "#23C265", "#4034E0"]);
        assert_eq!(chart.y_label, "Selling Price (Lakhs)");
    }

    #[test]
    fn test_chart_upper_bound_is_tallest_plus_headroom() {
        for raw in [-3.0, 0.0, 4.32, 12.0, 12.01, 37.5] {
            let estimate = EstimatedPrice::from_raw(raw).unwrap();
            let chart = ComparisonChart::new(&ReferencePrices::default(), &estimate);
            let expected = [1.0, 5.0, 12.0, estimate.as_f64()]
                .into_iter()
                .fold(f64::NEG_INFINITY, f64::max)
                + 2.0;
            assert_eq!(chart.y_max, expected);
        }
    }

    #[test]
    fn test_value_labels() {
        let chart = ComparisonChart::new(
            &ReferencePrices::default(),
            &EstimatedPrice::from_raw(4.32).unwrap(),
        );
        let labels: Vec<String> = chart.bars.iter().map(|b| b.value_label()).collect();
        assert_eq!(labels, vec!["₹1L", "₹5L", "₹12L", "₹4.32L"]);
    }

    #[test]
    fn test_reference_price_checks() {
        assert!(ReferencePrices::default().check().is_ok());
        let unordered = ReferencePrices {
            min: 6.0,
            avg: 5.0,
            max: 12.0,
        };
        assert!(unordered.check().unwrap_err().contains("min <= avg <= max"));
        let negative = ReferencePrices {
            min: -1.0,
            ..ReferencePrices::default()
        };
        assert!(negative.check().is_err());
    }
}
