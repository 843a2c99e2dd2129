use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::domain::property::{NewProperty, UpdateProperty};
use crate::domain::types::{Price, PriceRange, PropertyId, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
/// Form data for adding a property to the catalog.
pub struct AddPropertyForm {
    #[validate(length(min = 1))]
    pub title: String,
    pub district: Option<String>,
    #[validate(range(min = 0.0))]
    pub area_m2: Option<f64>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Lower edge of the recommended market band, if known.
    pub market_min: Option<f64>,
    /// Upper edge of the recommended market band, if known.
    pub market_max: Option<f64>,
    #[serde(default)]
    pub extras: Vec<String>,
    #[serde(default)]
    pub attributes: Value,
}

#[derive(Debug, Deserialize, Validate)]
/// Form data for updating an existing property.
pub struct SavePropertyForm {
    pub id: i32,
    #[validate(length(min = 1))]
    pub title: String,
    pub district: Option<String>,
    #[validate(range(min = 0.0))]
    pub area_m2: Option<f64>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub market_min: Option<f64>,
    pub market_max: Option<f64>,
    #[serde(default)]
    pub extras: Vec<String>,
    #[serde(default)]
    pub attributes: Value,
}

fn market_range(
    min: Option<f64>,
    max: Option<f64>,
) -> Result<Option<PriceRange>, TypeConstraintError> {
    match (min, max) {
        (Some(min), Some(max)) => Ok(Some(PriceRange::new(min, max)?)),
        _ => Ok(None),
    }
}

impl AddPropertyForm {
    pub fn into_new_property(self) -> Result<NewProperty, TypeConstraintError> {
        Ok(NewProperty::new(
            self.title,
            self.district,
            self.area_m2,
            Price::new(self.price)?,
            market_range(self.market_min, self.market_max)?,
            self.extras.into_iter().collect(),
            self.attributes,
        ))
    }
}

impl SavePropertyForm {
    pub fn into_update(self) -> Result<(PropertyId, UpdateProperty), TypeConstraintError> {
        let id = PropertyId::new(self.id)?;
        let updates = UpdateProperty::new(
            self.title,
            self.district,
            self.area_m2,
            Price::new(self.price)?,
            market_range(self.market_min, self.market_max)?,
            self.extras.into_iter().collect(),
            self.attributes,
        );
        Ok((id, updates))
    }
}
