//! Filter state applied to an already-fetched catalog.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::item::CatalogItem;
use crate::domain::types::PriceRange;

/// Pure value object; lives only for the current interaction.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemFilter {
    /// Exact district match after trimming.
    pub district: Option<String>,
    /// Keep items whose display price falls inside, boundaries included.
    pub price_range: Option<PriceRange>,
    /// An item must carry every requested extra.
    pub extras: BTreeSet<String>,
}

impl ItemFilter {
    pub fn is_empty(&self) -> bool {
        self.district.is_none() && self.price_range.is_none() && self.extras.is_empty()
    }

    pub fn matches<T: CatalogItem>(&self, item: &T) -> bool {
        if let Some(district) = &self.district {
            if item.district() != Some(district.as_str()) {
                return false;
            }
        }

        if let Some(range) = &self.price_range {
            if !range.contains(item.display_price()) {
                return false;
            }
        }

        self.extras.iter().all(|extra| item.has_extra(extra))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::NaiveDateTime;
    use serde_json::Value;

    use super::*;
    use crate::domain::property::Property;
    use crate::domain::types::{Price, PropertyId, PublicId};

    fn property(district: &str, price: f64, extras: &[&str]) -> Property {
        Property {
            id: PropertyId::new(1).unwrap(),
            public_id: PublicId::new(),
            title: "Two bedroom flat".to_string(),
            district: Some(district.to_string()),
            area_m2: Some(68.0),
            price: Price::new(price).unwrap(),
            market_range: None,
            extras: extras.iter().map(|s| s.to_string()).collect(),
            attributes: Value::Null,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ItemFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&property("Centro", 120_000.0, &[])));
    }

    #[test]
    fn district_is_an_exact_match() {
        let filter = ItemFilter {
            district: Some("Centro".to_string()),
            ..ItemFilter::default()
        };
        assert!(filter.matches(&property("Centro", 120_000.0, &[])));
        assert!(!filter.matches(&property("Savassi", 120_000.0, &[])));
    }

    #[test]
    fn price_filter_is_boundary_inclusive() {
        let filter = ItemFilter {
            price_range: Some(PriceRange::new(100_000.0, 200_000.0).unwrap()),
            ..ItemFilter::default()
        };
        assert!(filter.matches(&property("Centro", 100_000.0, &[])));
        assert!(filter.matches(&property("Centro", 200_000.0, &[])));
        assert!(!filter.matches(&property("Centro", 99_999.0, &[])));
    }

    #[test]
    fn every_requested_extra_must_be_present() {
        let filter = ItemFilter {
            extras: BTreeSet::from(["garage".to_string(), "pool".to_string()]),
            ..ItemFilter::default()
        };
        assert!(filter.matches(&property("Centro", 120_000.0, &["garage", "pool", "garden"])));
        assert!(!filter.matches(&property("Centro", 120_000.0, &["garage"])));
    }
}
