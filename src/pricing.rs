//! Market positioning of a price against a recommended band.
//!
//! Stateless companions to the pricing step of the announcement form: where a
//! value sits inside `[min, max]`, which side of the band it falls on, and a
//! handful of evenly spread suggested values.

use serde::Serialize;

/// Fractions of the band offered as suggested prices, in display order.
pub const SUGGESTION_FRACTIONS: [f64; 5] = [0.10, 0.25, 0.50, 0.75, 0.90];

/// Side of the recommended band a price falls on. Both boundaries count as
/// inside.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub enum MarketPosition {
    Below,
    Within,
    Above,
}

/// A suggested price inside the band, labeled by its band fraction.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PriceSuggestion {
    pub label: String,
    pub value: f64,
}

/// Validated `[min, max]` reference band with `min < max`.
///
/// Construction is the only failure point; every method on an existing band
/// is total.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct MarketBand {
    min: f64,
    max: f64,
}

impl MarketBand {
    /// Returns `None` for non-finite bounds or `min >= max`, in which case no
    /// guidance is shown at all.
    pub fn new(min: f64, max: f64) -> Option<Self> {
        if min.is_finite() && max.is_finite() && min < max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Fill level of the position bar, in `[0, 100]`.
    ///
    /// A missing, zero or NaN value maps to 0; the caller renders that as "no
    /// value", not as "0%".
    pub fn position(&self, current: Option<f64>) -> f64 {
        match current.filter(|value| value.is_finite() && *value != 0.0) {
            Some(value) => (((value - self.min) / (self.max - self.min)) * 100.0).clamp(0.0, 100.0),
            None => 0.0,
        }
    }

    pub fn classify(&self, current: f64) -> MarketPosition {
        if current < self.min {
            MarketPosition::Below
        } else if current > self.max {
            MarketPosition::Above
        } else {
            MarketPosition::Within
        }
    }

    /// Directional guidance line for the pricing step.
    ///
    /// Below the band the percentage divides by `min`, above it by `max`;
    /// inside it reports the rounded bar position. The per-side denominators
    /// are part of the numeric contract.
    pub fn message(&self, current: f64) -> String {
        match self.classify(current) {
            MarketPosition::Below => {
                let pct = ((self.min - current) / self.min * 100.0).round();
                format!("{pct:.0}% below the recommended minimum")
            }
            MarketPosition::Above => {
                let pct = ((current - self.max) / self.max * 100.0).round();
                format!("{pct:.0}% above the recommended maximum")
            }
            MarketPosition::Within => {
                let pct = self.position(Some(current)).round();
                format!("Positioned at {pct:.0}% of the market range")
            }
        }
    }

    /// Suggested prices at [`SUGGESTION_FRACTIONS`] of the band.
    pub fn suggestions(&self) -> Vec<PriceSuggestion> {
        self.suggestions_at(&SUGGESTION_FRACTIONS)
    }

    /// Suggested prices at the given band fractions, order preserved.
    pub fn suggestions_at(&self, fractions: &[f64]) -> Vec<PriceSuggestion> {
        fractions
            .iter()
            .map(|fraction| PriceSuggestion {
                label: format!("{:.0}%", fraction * 100.0),
                value: (self.min + (self.max - self.min) * fraction).round(),
            })
            .collect()
    }
}
