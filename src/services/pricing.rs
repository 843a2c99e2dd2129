//! Services behind the set-price step of the announcement flow.

use validator::Validate;

use crate::domain::types::{Price, PriceRange};
use crate::dto::pricing::PriceGuidance;
use crate::forms::price::SetPriceForm;
use crate::services::{ServiceError, ServiceResult};

/// Builds the market guidance block shown next to a price input.
///
/// Returns `None` when the range collapses to a point and no band can be
/// computed; the shell then renders the input without guidance.
pub fn price_guidance(current: Option<f64>, range: &PriceRange) -> Option<PriceGuidance> {
    let band = range.band()?;
    let value = current.filter(|v| v.is_finite() && *v != 0.0);

    Some(match value {
        Some(value) => PriceGuidance {
            position: band.position(Some(value)),
            has_value: true,
            classification: Some(band.classify(value)),
            message: Some(band.message(value)),
            suggestions: band.suggestions(),
        },
        None => PriceGuidance {
            position: 0.0,
            has_value: false,
            classification: None,
            message: None,
            suggestions: band.suggestions(),
        },
    })
}

/// Validates the set-price form and returns the accepted price together with
/// its guidance against the recommended range, when one exists.
pub fn apply_price_form(
    form: &SetPriceForm,
    range: Option<&PriceRange>,
) -> ServiceResult<(Price, Option<PriceGuidance>)> {
    if let Err(err) = form.validate() {
        log::error!("Failed to validate price form: {err}");
        return Err(ServiceError::Form("Invalid price".to_string()));
    }

    let price = Price::new(form.price)?;
    let guidance = range.and_then(|range| price_guidance(Some(form.price), range));

    Ok((price, guidance))
}
