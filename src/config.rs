//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::types::{PRICE_CEILING, PRICE_FLOOR};
use crate::pagination::{
    ITEMS_PER_PAGE_DESKTOP, ITEMS_PER_PAGE_MOBILE, PageLayout, VISIBLE_PAGES_DESKTOP,
    VISIBLE_PAGES_MOBILE, Viewport,
};

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
/// Catalog tuning knobs shared across page services.
pub struct CatalogConfig {
    pub items_per_page_mobile: usize,
    pub items_per_page_desktop: usize,
    pub visible_pages_mobile: usize,
    pub visible_pages_desktop: usize,
    pub price_floor: f64,
    pub price_ceiling: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            items_per_page_mobile: ITEMS_PER_PAGE_MOBILE,
            items_per_page_desktop: ITEMS_PER_PAGE_DESKTOP,
            visible_pages_mobile: VISIBLE_PAGES_MOBILE,
            visible_pages_desktop: VISIBLE_PAGES_DESKTOP,
            price_floor: PRICE_FLOOR,
            price_ceiling: PRICE_CEILING,
        }
    }
}

impl CatalogConfig {
    /// Reads an optional YAML file, then `CATALOG_`-prefixed environment
    /// overrides; anything unset keeps its default.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path));
        }
        builder
            .add_source(Environment::with_prefix("CATALOG"))
            .build()?
            .try_deserialize()
    }

    /// Page layout for one viewport class under this configuration.
    pub fn layout(&self, viewport: Viewport) -> PageLayout {
        match viewport {
            Viewport::Mobile => PageLayout {
                per_page: self.items_per_page_mobile,
                window: self.visible_pages_mobile,
            },
            Viewport::Desktop => PageLayout {
                per_page: self.items_per_page_desktop,
                window: self.visible_pages_desktop,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_viewport_constants() {
        let config = CatalogConfig::default();
        assert_eq!(config.layout(Viewport::Mobile), Viewport::Mobile.layout());
        assert_eq!(config.layout(Viewport::Desktop), Viewport::Desktop.layout());
        assert_eq!(config.price_floor, PRICE_FLOOR);
        assert_eq!(config.price_ceiling, PRICE_CEILING);
    }
}
