use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::types::{Price, PriceRange, PropertyId, PublicId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: PropertyId,
    pub public_id: PublicId,
    pub title: String,
    pub district: Option<String>,
    pub area_m2: Option<f64>,
    pub price: Price,
    /// Recommended `[min, max]` band this property is priced against.
    pub market_range: Option<PriceRange>,
    pub extras: BTreeSet<String>,
    /// Unvalidated pass-through attributes rendered as-is by the shell.
    pub attributes: Value,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProperty {
    pub title: String,
    pub district: Option<String>,
    pub area_m2: Option<f64>,
    pub price: Price,
    pub market_range: Option<PriceRange>,
    pub extras: BTreeSet<String>,
    pub attributes: Value,
}

impl NewProperty {
    #[must_use]
    pub fn new(
        title: String,
        district: Option<String>,
        area_m2: Option<f64>,
        price: Price,
        market_range: Option<PriceRange>,
        extras: BTreeSet<String>,
        attributes: Value,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            district: district
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            area_m2,
            price,
            market_range,
            extras: extras
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            attributes,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateProperty {
    pub title: String,
    pub district: Option<String>,
    pub area_m2: Option<f64>,
    pub price: Price,
    pub market_range: Option<PriceRange>,
    pub extras: BTreeSet<String>,
    pub attributes: Value,
}

impl UpdateProperty {
    #[must_use]
    pub fn new(
        title: String,
        district: Option<String>,
        area_m2: Option<f64>,
        price: Price,
        market_range: Option<PriceRange>,
        extras: BTreeSet<String>,
        attributes: Value,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            district: district
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            area_m2,
            price,
            market_range,
            extras: extras
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            attributes,
        }
    }
}
