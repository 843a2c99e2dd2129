use serde::Serialize;

use crate::pricing::{MarketPosition, PriceSuggestion};

/// Everything the pricing step renders next to the price input.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceGuidance {
    /// Fill level of the position bar, `[0, 100]`.
    pub position: f64,
    /// False when no usable value was entered; the bar shows "no value"
    /// instead of "0%".
    pub has_value: bool,
    pub classification: Option<MarketPosition>,
    pub message: Option<String>,
    /// Suggested prices inside the band, in fraction order.
    pub suggestions: Vec<PriceSuggestion>,
}
