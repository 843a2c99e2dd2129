use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
/// Form data for the set-price step of the announcement flow.
pub struct SetPriceForm {
    #[validate(range(min = 1.0))]
    pub price: f64,
}
