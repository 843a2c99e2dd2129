use serde::Serialize;

use crate::domain::filter::ItemFilter;
use crate::domain::media::MediaRef;
use crate::domain::types::{AnnouncementId, PropertyId, PublicId};
use crate::dto::pricing::PriceGuidance;
use crate::pagination::Paginated;

/// Query parameters accepted by the catalog page services.
#[derive(Debug, Default, Clone)]
pub struct CatalogQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
    /// Structured filter state from the filter panel.
    pub filter: ItemFilter,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PropertyCard {
    pub id: PropertyId,
    pub public_id: PublicId,
    pub title: String,
    pub district: Option<String>,
    pub area_m2: Option<f64>,
    pub price: f64,
    pub media: Vec<MediaRef>,
    /// Present when the property carries a usable market range.
    pub guidance: Option<PriceGuidance>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnnouncementCard {
    pub id: AnnouncementId,
    pub public_id: PublicId,
    pub title: String,
    pub district: Option<String>,
    pub price: f64,
    pub status: String,
    pub media: Vec<MediaRef>,
}

/// Data required to render the properties catalog page.
#[derive(Debug)]
pub struct PropertiesPageData {
    pub properties: Paginated<PropertyCard>,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
    /// Filter state echoed back to the filter panel.
    pub filter: ItemFilter,
}

/// Data required to render the announcements page.
#[derive(Debug)]
pub struct AnnouncementsPageData {
    pub announcements: Paginated<AnnouncementCard>,
    pub search_query: Option<String>,
    pub filter: ItemFilter,
}
