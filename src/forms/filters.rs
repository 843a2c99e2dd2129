use serde::Deserialize;
use validator::Validate;

use crate::config::CatalogConfig;
use crate::domain::filter::ItemFilter;
use crate::domain::types::{PriceRange, TypeConstraintError};
use crate::dto::catalog::CatalogQuery;

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data from the filter/search panel above a catalog list.
pub struct FilterForm {
    /// Free-text search entered by the user.
    pub q: Option<String>,
    /// Page number requested by the pager.
    pub page: Option<usize>,
    /// District to match exactly.
    pub district: Option<String>,
    #[validate(range(min = 0.0))]
    pub min_price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub max_price: Option<f64>,
    /// Extras the item must carry, all of them.
    #[serde(default)]
    pub extras: Vec<String>,
}

impl FilterForm {
    /// Builds the catalog query; a missing price bound falls back to the
    /// configured band edge.
    pub fn into_catalog_query(
        self,
        config: &CatalogConfig,
    ) -> Result<CatalogQuery, TypeConstraintError> {
        let price_range = match (self.min_price, self.max_price) {
            (None, None) => None,
            (min, max) => Some(PriceRange::with_bounds(
                min.unwrap_or(config.price_floor),
                max.unwrap_or(config.price_ceiling),
                config.price_floor,
                config.price_ceiling,
            )?),
        };

        let filter = ItemFilter {
            district: self
                .district
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            price_range,
            extras: self
                .extras
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        };

        Ok(CatalogQuery {
            search: self.q,
            page: self.page,
            filter,
        })
    }
}
